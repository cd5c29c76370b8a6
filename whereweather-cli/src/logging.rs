use env_logger::Env;

/// `warn` and above by default; `RUST_LOG` overrides, e.g.
/// `RUST_LOG=whereweather_core=debug`.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}
