use env_logger::Env;

/// Route `log` output to stderr. `RUST_LOG` overrides the default `info`
/// filter; timestamps are dropped because every run is interactive.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
