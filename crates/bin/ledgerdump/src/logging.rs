//! tracing_subscriber-based logging setup for the ledgerdump binary.

use std::io::IsTerminal;
use std::sync::Once;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

static LEDGERDUMP_LOG_ENV_VAR: &str = "LEDGERDUMP_LOG";

/// Initializes a tracing subscriber for logging.
pub fn init() {
    // Wrapped in `Once` so tests can enable logging too without panicking on
    // double initialization.
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .with_env_var(LEDGERDUMP_LOG_ENV_VAR)
            .from_env_lossy();

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .init();
    });
}
