//! crates/mlog/src/sink.rs
//! Destinations for rendered lines.

use std::io::{self, Write};
use std::sync::Arc;

/// Consumer of fully rendered log lines.
///
/// The `line` borrow ends when the call returns; the scratch buffer behind it
/// is reused for the next line. Implementations must not panic on write
/// failures; they drop the line instead.
///
/// Every `Fn(&str) + Send + Sync` closure is a sink:
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use mlog::{Logger, Severity, Sink};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let store = Arc::clone(&seen);
/// let sink: Arc<dyn Sink> = Arc::new(move |line: &str| {
///     store.lock().unwrap().push(line.to_owned());
/// });
///
/// let mut logger = Logger::new();
/// logger.set_sink(Severity::Info, Some(sink));
/// logger.emit(Severity::Warn, format_args!("low battery"));
/// assert_eq!(seen.lock().unwrap().as_slice(), ["low battery"]);
/// ```
pub trait Sink: Send + Sync {
    /// Consumes one rendered line.
    fn write_line(&self, line: &str);
}

impl<F> Sink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn write_line(&self, line: &str) {
        self(line);
    }
}

/// Shared handle to a sink, as stored by [`Logger`](crate::Logger).
pub type SharedSink = Arc<dyn Sink>;

/// The fixed diagnostic stream: the process's standard error.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrStream;

impl Sink for StderrStream {
    fn write_line(&self, line: &str) {
        let mut stderr = io::stderr().lock();
        if stderr.write_all(line.as_bytes()).is_ok() {
            let _ = stderr.flush();
        }
    }
}
