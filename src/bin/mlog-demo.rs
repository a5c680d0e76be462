#![deny(unsafe_code)]

//! Emits one message per severity through a logger configured from the
//! environment.
//!
//! - `MLOG_LEVEL`: primary (stdout) threshold, `INFO` when unset.
//! - `MLOG_STDERR`: enables the stderr diagnostic path at the given level.
//! - `MLOG_FORMAT`: decoration list such as `color,timestamp,head,newline`.
//!   Defaults to `head,newline`, plus `color` when stdout is a terminal.

use std::env;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use std::sync::Arc;

use mlog::{FormatConfig, Logger, LoggerConfig, Severity, levels};
use mlog_sink::StdioSink;

const LEVEL_VAR: &str = "MLOG_LEVEL";
const STDERR_VAR: &str = "MLOG_STDERR";
const FORMAT_VAR: &str = "MLOG_FORMAT";

fn default_format() -> FormatConfig {
    let format = FormatConfig::LEVEL_HEAD | FormatConfig::NEWLINE;
    if io::stdout().is_terminal() {
        format | FormatConfig::COLOR
    } else {
        format
    }
}

fn format_from_env() -> Result<FormatConfig, mlog::ParseFormatError> {
    match env::var(FORMAT_VAR) {
        Ok(value) if !value.trim().is_empty() => value.parse(),
        _ => Ok(default_format()),
    }
}

fn build_logger(format: FormatConfig) -> Logger {
    let config = LoggerConfig {
        format,
        diagnostic_format: format,
        ..LoggerConfig::with_env(LEVEL_VAR, STDERR_VAR)
    };
    let mut logger = Logger::from_config(&config);
    let threshold = levels::parse_from_env(config.env_var.as_deref()).unwrap_or(Severity::Info);
    logger.set_sink(threshold, Some(Arc::new(StdioSink::stdout())));
    logger
}

fn main() -> ExitCode {
    let format = match format_from_env() {
        Ok(format) => format,
        Err(error) => {
            let _ = writeln!(io::stderr(), "mlog-demo: {FORMAT_VAR}: {error}");
            return ExitCode::from(2);
        }
    };

    if let Err(error) = mlog::install(build_logger(format)) {
        let _ = writeln!(io::stderr(), "mlog-demo: {error}");
        return ExitCode::FAILURE;
    }

    #[cfg(feature = "tracing")]
    if let Err(error) = mlog::init_tracing() {
        let _ = writeln!(io::stderr(), "mlog-demo: {error}");
    }

    for level in Severity::ALL {
        mlog::mlog!(level, "message level {level}");
    }

    #[cfg(feature = "tracing")]
    tracing::info!("forwarded from tracing");

    ExitCode::SUCCESS
}
