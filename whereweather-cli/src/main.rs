//! Binary crate for the `whereweather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logger setup
//! - Printing the report and choosing the exit code

use std::process::ExitCode;

use clap::Parser;
use log::error;

mod cli;
mod logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();

    let cmd = cli::Cli::parse();
    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
