use std::sync::{Mutex, MutexGuard, PoisonError};

use mlog::Sink;

/// In-memory sink that records every line it receives.
///
/// Meant for tests and for embedders that forward log lines elsewhere in
/// batches.
///
/// ```
/// use std::sync::Arc;
/// use mlog::{Logger, Severity};
/// use mlog_sink::CaptureSink;
///
/// let capture = Arc::new(CaptureSink::new());
/// let mut logger = Logger::new();
/// logger.set_sink(Severity::Debug, Some(capture.clone()));
/// logger.emit(Severity::Verbose, format_args!("step {}", 3));
/// assert_eq!(capture.lines(), ["step 3"]);
/// ```
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    /// Creates an empty capture.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    fn locked(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the recorded lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.locked().clone()
    }

    /// Removes and returns the recorded lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.locked())
    }

    /// Returns every recorded line concatenated.
    #[must_use]
    pub fn contents(&self) -> String {
        self.locked().concat()
    }

    /// Number of recorded lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locked().len()
    }

    /// Returns `true` when nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locked().is_empty()
    }
}

impl Sink for CaptureSink {
    fn write_line(&self, line: &str) {
        self.locked().push(line.to_owned());
    }
}
