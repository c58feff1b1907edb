use crate::error::{ClosyError, Result};
use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor a flag says otherwise.
pub const DEFAULT_LEVEL: &str = "warn";

/// Picks the filter directive from the command-line flags, falling back to config.
pub fn level_for(verbose: u8, quiet: bool, configured: Option<&str>) -> String {
    match (quiet, verbose) {
        (true, _) => "error".to_string(),
        (false, 0) => configured.unwrap_or(DEFAULT_LEVEL).to_string(),
        (false, 1) => "info".to_string(),
        (false, _) => "debug".to_string(),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init(level: &str) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|err| ClosyError::Telemetry(format!("invalid log level '{level}': {err}")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|err| ClosyError::Telemetry(err.to_string()))
}
