//! Process-wide tracing setup.
//!
//! `RUST_LOG` takes precedence over the configured filter. Initialization
//! is attempted once; later calls are no-ops.

use tracing_subscriber::{EnvFilter, fmt};

use crate::errors::{AppError, AppResult};

pub fn init_logging(default_filter: &str) -> AppResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| AppError::Config(format!("invalid log filter `{default_filter}`: {e}")))?,
    };

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    Ok(())
}
