//! crates/mlog/src/macros.rs
//! Logging macros.
//!
//! Every macro accepts an optional `logger: <expr>,` prefix naming any value
//! with an `emit(Severity, fmt::Arguments)` method, such as a [`Logger`] or a
//! [`SharedLogger`]. Without it the process-wide logger from
//! [`global`](crate::global()) is used. Arguments are only formatted when a
//! destination accepts the level.
//!
//! ```
//! use mlog::{log_warn, Logger, Severity};
//!
//! let mut logger = Logger::new();
//! logger.set_sink(Severity::Warn, Some(std::sync::Arc::new(|_: &str| {})));
//! log_warn!(logger: logger, "{} retries left", 2);
//! ```
//!
//! [`Logger`]: crate::Logger
//! [`SharedLogger`]: crate::SharedLogger

/// Emits a message at an explicit [`Severity`](crate::Severity).
#[macro_export]
macro_rules! mlog {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.emit($level, ::core::format_args!($($arg)+))
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::global().emit($level, ::core::format_args!($($arg)+))
    };
}

/// Emits a message at [`Severity::Error`](crate::Severity::Error).
#[macro_export]
macro_rules! log_error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::mlog!(logger: $logger, $crate::Severity::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::mlog!($crate::Severity::Error, $($arg)+)
    };
}

/// Emits a message at [`Severity::Warn`](crate::Severity::Warn).
#[macro_export]
macro_rules! log_warn {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::mlog!(logger: $logger, $crate::Severity::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::mlog!($crate::Severity::Warn, $($arg)+)
    };
}

/// Emits a message at [`Severity::Info`](crate::Severity::Info).
#[macro_export]
macro_rules! log_info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::mlog!(logger: $logger, $crate::Severity::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::mlog!($crate::Severity::Info, $($arg)+)
    };
}

/// Emits a message at [`Severity::Verbose`](crate::Severity::Verbose).
#[macro_export]
macro_rules! log_verbose {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::mlog!(logger: $logger, $crate::Severity::Verbose, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::mlog!($crate::Severity::Verbose, $($arg)+)
    };
}

/// Emits a message at [`Severity::Debug`](crate::Severity::Debug).
#[macro_export]
macro_rules! log_debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::mlog!(logger: $logger, $crate::Severity::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::mlog!($crate::Severity::Debug, $($arg)+)
    };
}
