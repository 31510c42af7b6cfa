use tracing_subscriber::EnvFilter;
use crate::core::domain::LOG_LEVEL_ENV;

// Log filter comes from BMS_LOG_LEVEL (e.g. "debug" or "bms=trace"), info otherwise.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // logs are usually collected from stdout, keep them free of colour codes.
        .with_ansi(false)
        .json()
        .init();
}
