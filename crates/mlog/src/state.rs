//! crates/mlog/src/state.rs
//! Logger state: thresholds, sinks, format configuration and dispatch.

mod guard;

pub use guard::ThresholdGuard;

use std::fmt;
use std::sync::Arc;

use crate::format::FormatConfig;
use crate::levels::{self, Severity};
use crate::render::{DEFAULT_CAPACITY, Scratch};
use crate::sink::{SharedSink, StderrStream};

/// Environment and format settings consumed by [`Logger::from_config`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Variable holding the primary threshold.
    pub env_var: Option<String>,
    /// Variable that enables the diagnostic path and holds its threshold.
    pub diagnostic_env_var: Option<String>,
    /// Decorations for the primary sink.
    pub format: FormatConfig,
    /// Decorations for the diagnostic stream.
    pub diagnostic_format: FormatConfig,
}

impl LoggerConfig {
    /// Creates a configuration reading the two named variables.
    #[must_use]
    pub fn with_env(env_var: impl Into<String>, diagnostic_env_var: impl Into<String>) -> Self {
        Self {
            env_var: Some(env_var.into()),
            diagnostic_env_var: Some(diagnostic_env_var.into()),
            ..Self::default()
        }
    }
}

/// One logger: a primary sink path and a diagnostic stream path, each with its
/// own threshold and decorations.
///
/// The state is plain data owned by the embedder, which decides whether it
/// lives in a global, a thread-local or a subsystem. Wrap it in
/// [`SharedLogger`](crate::SharedLogger) for concurrent access.
#[derive(Clone)]
pub struct Logger {
    primary_threshold: Severity,
    primary_sink: Option<SharedSink>,
    primary_format: FormatConfig,
    diagnostic_enabled: bool,
    diagnostic_threshold: Severity,
    diagnostic_format: FormatConfig,
    diagnostic_stream: SharedSink,
}

impl Logger {
    /// Creates a logger with threshold [`Severity::Error`], no primary sink,
    /// the diagnostic path disabled and no decorations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            primary_threshold: Severity::Error,
            primary_sink: None,
            primary_format: FormatConfig::EMPTY,
            diagnostic_enabled: false,
            diagnostic_threshold: Severity::Error,
            diagnostic_format: FormatConfig::EMPTY,
            diagnostic_stream: Arc::new(StderrStream),
        }
    }

    /// Creates a logger configured from the environment.
    ///
    /// The primary threshold defaults to [`Severity::Error`] and is overridden
    /// by `env_var` when it is set and non-empty. A set, non-empty
    /// `diagnostic_env_var` enables the diagnostic path at its level. The
    /// primary path stays inert until [`set_sink`](Self::set_sink) installs a
    /// sink. Both format configurations are stored as given.
    #[must_use]
    pub fn init(
        env_var: Option<&str>,
        diagnostic_env_var: Option<&str>,
        format: FormatConfig,
        diagnostic_format: FormatConfig,
    ) -> Self {
        let mut logger = Self::new();
        if let Some(level) = levels::parse_from_env(env_var) {
            logger.primary_threshold = level;
        }

        let (enabled, level) =
            levels::diagnostic_from_env(diagnostic_env_var, logger.diagnostic_threshold);
        logger.diagnostic_enabled = enabled;
        logger.diagnostic_threshold = level;

        logger.primary_format = format;
        logger.diagnostic_format = diagnostic_format;
        logger
    }

    /// Same as [`init`](Self::init) with the settings of `config`.
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::init(
            config.env_var.as_deref(),
            config.diagnostic_env_var.as_deref(),
            config.format,
            config.diagnostic_format,
        )
    }

    /// Replaces the diagnostic stream, which is standard error by default.
    #[must_use]
    pub fn with_diagnostic_stream(mut self, stream: SharedSink) -> Self {
        self.diagnostic_stream = stream;
        self
    }

    /// Sets the primary threshold and, when `sink` is `Some`, the primary sink.
    ///
    /// Passing `None` keeps the installed sink, so callers can change the level
    /// alone. Integer thresholds are clamped into range.
    pub fn set_sink(&mut self, threshold: impl Into<Severity>, sink: Option<SharedSink>) {
        self.primary_threshold = threshold.into();
        if let Some(sink) = sink {
            self.primary_sink = Some(sink);
        }
    }

    /// Removes the primary sink, making the primary path inert.
    pub fn clear_sink(&mut self) -> Option<SharedSink> {
        self.primary_sink.take()
    }

    /// Enables the diagnostic path at `threshold`.
    pub fn enable_diagnostic(&mut self, threshold: impl Into<Severity>) {
        self.diagnostic_threshold = threshold.into();
        self.diagnostic_enabled = true;
    }

    /// Disables the diagnostic path. Its threshold is kept.
    pub fn disable_diagnostic(&mut self) {
        self.diagnostic_enabled = false;
    }

    /// Sets the primary path decorations.
    pub fn set_format(&mut self, format: FormatConfig) {
        self.primary_format = format;
    }

    /// Sets the diagnostic path decorations.
    pub fn set_diagnostic_format(&mut self, format: FormatConfig) {
        self.diagnostic_format = format;
    }

    /// Overrides the primary threshold until the returned guard is dropped.
    pub fn scoped_threshold(&mut self, threshold: impl Into<Severity>) -> ThresholdGuard<'_> {
        let previous = self.primary_threshold;
        self.primary_threshold = threshold.into();
        ThresholdGuard::new(self, previous)
    }

    /// Returns the primary threshold.
    #[must_use]
    pub const fn threshold(&self) -> Severity {
        self.primary_threshold
    }

    /// Returns `true` when a primary sink is installed.
    #[must_use]
    pub const fn has_sink(&self) -> bool {
        self.primary_sink.is_some()
    }

    /// Returns the primary path decorations.
    #[must_use]
    pub const fn format(&self) -> FormatConfig {
        self.primary_format
    }

    /// Returns `true` when the diagnostic path is enabled.
    #[must_use]
    pub const fn diagnostic_enabled(&self) -> bool {
        self.diagnostic_enabled
    }

    /// Returns the diagnostic threshold.
    #[must_use]
    pub const fn diagnostic_threshold(&self) -> Severity {
        self.diagnostic_threshold
    }

    /// Returns the diagnostic path decorations.
    #[must_use]
    pub const fn diagnostic_format(&self) -> FormatConfig {
        self.diagnostic_format
    }

    fn diagnostic_accepts(&self, level: Severity) -> bool {
        self.diagnostic_enabled && level.passes(self.diagnostic_threshold)
    }

    fn primary_accepts(&self, level: Severity) -> Option<&SharedSink> {
        self.primary_sink
            .as_ref()
            .filter(|_| level.passes(self.primary_threshold))
    }

    /// Reports whether a message at `level` would reach any destination.
    #[must_use]
    pub fn enabled(&self, level: Severity) -> bool {
        self.diagnostic_accepts(level) || self.primary_accepts(level).is_some()
    }

    /// Renders and dispatches one message using a [`DEFAULT_CAPACITY`] scratch buffer.
    ///
    /// The diagnostic stream is written first, then the primary sink. Each path
    /// renders with its own decorations. Nothing is formatted when neither path
    /// accepts `level`.
    pub fn emit(&self, level: Severity, args: fmt::Arguments<'_>) {
        self.emit_with::<DEFAULT_CAPACITY>(level, args);
    }

    /// Same as [`emit`](Self::emit) with an `N`-byte scratch buffer.
    pub fn emit_with<const N: usize>(&self, level: Severity, args: fmt::Arguments<'_>) {
        let diagnostic = self.diagnostic_accepts(level);
        let primary = self.primary_accepts(level);
        if !diagnostic && primary.is_none() {
            return;
        }

        let mut scratch = Scratch::<N>::new();
        if diagnostic {
            let line = scratch.render(self.diagnostic_format, level, args);
            self.diagnostic_stream.write_line(line.as_str());
        }
        if let Some(sink) = primary {
            let line = scratch.render(self.primary_format, level, args);
            sink.write_line(line.as_str());
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("primary_threshold", &self.primary_threshold)
            .field("has_sink", &self.primary_sink.is_some())
            .field("primary_format", &self.primary_format)
            .field("diagnostic_enabled", &self.diagnostic_enabled)
            .field("diagnostic_threshold", &self.diagnostic_threshold)
            .field("diagnostic_format", &self.diagnostic_format)
            .finish_non_exhaustive()
    }
}
