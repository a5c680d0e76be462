//! crates/mlog/src/shared.rs
//! Lock-guarded logger for concurrent emitters and configuration changes.

use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::format::FormatConfig;
use crate::levels::Severity;
use crate::sink::SharedSink;
use crate::state::Logger;

/// A [`Logger`] behind a read-write lock.
///
/// [`emit`](Self::emit) takes the read lock, so emitters on different threads
/// run concurrently; setters take the write lock. Poisoned locks are recovered
/// rather than propagated. Sinks must not call setters on the logger that is
/// invoking them.
#[derive(Debug, Default)]
pub struct SharedLogger {
    inner: RwLock<Logger>,
}

impl SharedLogger {
    /// Wraps `logger`.
    #[must_use]
    pub const fn new(logger: Logger) -> Self {
        Self {
            inner: RwLock::new(logger),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Logger> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Logger> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`Logger::set_sink`].
    pub fn set_sink(&self, threshold: impl Into<Severity>, sink: Option<SharedSink>) {
        self.write().set_sink(threshold, sink);
    }

    /// See [`Logger::clear_sink`].
    pub fn clear_sink(&self) -> Option<SharedSink> {
        self.write().clear_sink()
    }

    /// See [`Logger::enable_diagnostic`].
    pub fn enable_diagnostic(&self, threshold: impl Into<Severity>) {
        self.write().enable_diagnostic(threshold);
    }

    /// See [`Logger::disable_diagnostic`].
    pub fn disable_diagnostic(&self) {
        self.write().disable_diagnostic();
    }

    /// See [`Logger::set_format`].
    pub fn set_format(&self, format: FormatConfig) {
        self.write().set_format(format);
    }

    /// See [`Logger::set_diagnostic_format`].
    pub fn set_diagnostic_format(&self, format: FormatConfig) {
        self.write().set_diagnostic_format(format);
    }

    /// Replaces the whole configuration.
    pub fn replace(&self, logger: Logger) -> Logger {
        std::mem::replace(&mut *self.write(), logger)
    }

    /// Returns a copy of the current configuration.
    #[must_use]
    pub fn snapshot(&self) -> Logger {
        self.read().clone()
    }

    /// See [`Logger::enabled`].
    #[must_use]
    pub fn enabled(&self, level: Severity) -> bool {
        self.read().enabled(level)
    }

    /// See [`Logger::emit`].
    pub fn emit(&self, level: Severity, args: fmt::Arguments<'_>) {
        self.read().emit(level, args);
    }

    /// Consumes the wrapper and returns the logger.
    #[must_use]
    pub fn into_inner(self) -> Logger {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Logger> for SharedLogger {
    fn from(logger: Logger) -> Self {
        Self::new(logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::thread;

    fn collecting() -> (SharedSink, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let store = Arc::clone(&lines);
        let sink: SharedSink = Arc::new(move |line: &str| {
            store.lock().expect("lock").push(line.to_owned());
        });
        (sink, lines)
    }

    #[test]
    fn concurrent_emitters_all_deliver() {
        let (sink, lines) = collecting();
        let shared = Arc::new(SharedLogger::new(Logger::new()));
        shared.set_sink(Severity::Debug, Some(sink));

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for i in 0..25 {
                        shared.emit(Severity::Info, format_args!("{worker}:{i}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker finished");
        }

        assert_eq!(lines.lock().expect("lock").len(), 100);
    }

    #[test]
    fn setters_apply_through_the_lock() {
        let (sink, lines) = collecting();
        let shared = SharedLogger::from(Logger::new());
        shared.set_sink(Severity::Warn, Some(sink));
        shared.set_format(FormatConfig::LEVEL_HEAD);

        shared.emit(Severity::Info, format_args!("filtered"));
        shared.emit(Severity::Warn, format_args!("kept"));
        assert!(!shared.enabled(Severity::Info));

        let snapshot = shared.snapshot();
        assert_eq!(snapshot.threshold(), Severity::Warn);
        assert_eq!(*lines.lock().expect("lock"), ["[W]kept"]);
    }

    #[test]
    fn replace_swaps_configuration() {
        let shared = SharedLogger::default();
        let mut next = Logger::new();
        next.enable_diagnostic(Severity::Info);

        let previous = shared.replace(next);
        assert!(!previous.diagnostic_enabled());
        assert!(shared.into_inner().diagnostic_enabled());
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let shared = Arc::new(SharedLogger::default());
        let poisoner = Arc::clone(&shared);
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.write().expect("first lock");
            panic!("poison the logger lock");
        })
        .join();

        shared.set_sink(Severity::Info, None);
        assert_eq!(shared.snapshot().threshold(), Severity::Info);
    }
}
