//! Log level selection and subscriber setup for the CLI.
//!
//! The libraries log through the `log` facade; the fmt subscriber installed
//! here picks those records up alongside any `tracing` events.

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Picks the log level from `-v` and the `LOG_LEVEL` environment variable.
/// `-v` wins. An unrecognized `LOG_LEVEL` falls back to the default and
/// yields a warning to log once the subscriber is up.
pub(crate) fn select_level(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }
    match env_val.map(str::trim) {
        None => (DEFAULT_LOG_LEVEL, None),
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "trace" => (tracing::Level::TRACE, None),
            "debug" | "verbose" => (tracing::Level::DEBUG, None),
            "info" => (tracing::Level::INFO, None),
            "warn" => (tracing::Level::WARN, None),
            "error" => (tracing::Level::ERROR, None),
            _ => (
                DEFAULT_LOG_LEVEL,
                Some(format!(
                    "Invalid `LOG_LEVEL` environment variable value: `{value}`"
                )),
            ),
        },
    }
}

pub(crate) fn init(verbose: bool) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) = select_level(verbose, env_val.as_deref());

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}
