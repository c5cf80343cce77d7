use tracing_subscriber::EnvFilter;

/// Environment variable that overrides every other log level source.
pub const LOG_ENV: &str = "ACCORD_LOG";

/// Pick the filter directive: `ACCORD_LOG`, then `--verbose`, then the
/// configured level, then `warn`.
pub fn directive(env: Option<&str>, verbose: bool, configured: Option<&str>) -> String {
    if let Some(env) = env.filter(|e| !e.trim().is_empty()) {
        return env.to_string();
    }
    if verbose {
        return "debug".into();
    }
    configured.unwrap_or("warn").to_string()
}

/// Install the global tracing subscriber, writing to stderr.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool, configured: Option<&str>) {
    let env = std::env::var(LOG_ENV).ok();
    let directive = directive(env.as_deref(), verbose, configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
