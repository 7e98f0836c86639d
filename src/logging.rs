use tracing_subscriber::EnvFilter;

/// Create an environment filter based on verbosity level
pub fn create_env_filter(verbosity: u8) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbosity {
            0 => EnvFilter::new("mpssh=warn,hostlist=warn"),
            1 => EnvFilter::new("mpssh=info,hostlist=info"),
            2 => EnvFilter::new("mpssh=debug,hostlist=debug"),
            // -vvv also shows every skipped host line
            _ => EnvFilter::new("mpssh=trace,hostlist=trace"),
        }
    }
}

/// Initialize logging to stderr so stdout stays clean for host output.
pub fn init_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(create_env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
