// Logging setup for the example drivers.

use crate::error::{Error, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter applied when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a formatting subscriber as the global default.
///
/// Fails with [`Error::LoggingInit`] if a global subscriber is already set.
pub fn init_logging() -> Result<()> {
  let subscriber = fmt()
    .with_env_filter(env_filter())
    .with_target(false)
    .finish();

  tracing::subscriber::set_global_default(subscriber)
    .map_err(|e| Error::LoggingInit(e.to_string()))?;
  tracing::debug!("global tracing subscriber set");
  Ok(())
}
