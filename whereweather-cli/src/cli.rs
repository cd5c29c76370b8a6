use anyhow::Context;
use clap::Parser;
use whereweather_core::{Config, Services, current_weather_report};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "whereweather", version, about = "Current weather for a city or for where you are")]
pub struct Cli {
    /// City to fetch weather for. If omitted, the location is derived from your IP address.
    #[arg(long)]
    pub city: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load().context("Failed to load configuration")?;
        let services = Services::from_config(&config).context("Failed to build HTTP client")?;

        let report = current_weather_report(self.city.as_deref(), &services).await?;
        println!("{report}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn city_is_optional() {
        let cli = Cli::try_parse_from(["whereweather"]).unwrap();
        assert_eq!(cli.city, None);
    }

    #[test]
    fn city_flag_is_kept_verbatim() {
        let cli = Cli::try_parse_from(["whereweather", "--city", "Saint-Étienne"]).unwrap();
        assert_eq!(cli.city.as_deref(), Some("Saint-Étienne"));
    }

    #[test]
    fn subcommands_are_rejected() {
        assert!(Cli::try_parse_from(["whereweather", "show", "Paris"]).is_err());
    }
}
