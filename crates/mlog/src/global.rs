//! crates/mlog/src/global.rs
//! Opt-in process-wide logger used by the logging macros.
//!
//! Nothing in the crate requires the global: embedders that keep their own
//! [`Logger`] values never touch it. The first call to [`global`] without a
//! prior [`install`] leaves an inert default logger in place.

use std::sync::OnceLock;

use crate::error::InstallError;
use crate::format::FormatConfig;
use crate::shared::SharedLogger;
use crate::state::{Logger, LoggerConfig};

static GLOBAL: OnceLock<SharedLogger> = OnceLock::new();

/// Installs `logger` as the process-wide logger.
///
/// # Errors
///
/// Returns [`InstallError`] when a logger was already installed, or when
/// [`global`] ran first and fixed the default.
pub fn install(logger: Logger) -> Result<&'static SharedLogger, InstallError> {
    let mut pending = Some(logger);
    let installed = GLOBAL.get_or_init(|| SharedLogger::new(pending.take().unwrap_or_default()));
    if pending.is_some() {
        return Err(InstallError);
    }
    Ok(installed)
}

/// Resolves a logger from the environment and installs it.
///
/// See [`Logger::init`] for the resolution rules.
///
/// # Errors
///
/// Same as [`install`].
pub fn init_global(
    env_var: Option<&str>,
    diagnostic_env_var: Option<&str>,
    format: FormatConfig,
    diagnostic_format: FormatConfig,
) -> Result<&'static SharedLogger, InstallError> {
    install(Logger::init(
        env_var,
        diagnostic_env_var,
        format,
        diagnostic_format,
    ))
}

/// Same as [`init_global`] with the settings of `config`.
///
/// # Errors
///
/// Same as [`install`].
pub fn init_global_from_config(
    config: &LoggerConfig,
) -> Result<&'static SharedLogger, InstallError> {
    install(Logger::from_config(config))
}

/// Returns the process-wide logger, installing an inert default when none
/// exists yet.
pub fn global() -> &'static SharedLogger {
    GLOBAL.get_or_init(SharedLogger::default)
}

/// Returns the process-wide logger if one has been installed or defaulted.
pub fn try_global() -> Option<&'static SharedLogger> {
    GLOBAL.get()
}
