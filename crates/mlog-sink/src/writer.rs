use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use mlog::Sink;

/// Sink that streams lines into an [`io::Write`] implementor.
///
/// The writer sits behind a mutex so the sink can be shared between threads.
/// Failed writes are dropped and counted; see
/// [`failed_writes`](Self::failed_writes).
///
/// ```
/// use mlog::Sink;
/// use mlog_sink::WriterSink;
///
/// let sink = WriterSink::new(Vec::<u8>::new());
/// sink.write_line("[W]low disk\n");
/// assert_eq!(sink.into_inner(), b"[W]low disk\n");
/// ```
pub struct WriterSink<W> {
    writer: Mutex<W>,
    failed: AtomicU64,
}

impl<W> WriterSink<W> {
    /// Wraps `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            failed: AtomicU64::new(0),
        }
    }

    /// Number of lines lost to write errors so far.
    #[must_use]
    pub fn failed_writes(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Runs `f` with the writer locked.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut writer)
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> WriterSink<W> {
    /// Flushes the writer.
    ///
    /// # Errors
    ///
    /// Returns the writer's flush error.
    pub fn flush(&self) -> io::Result<()> {
        self.with_writer(Write::flush)
    }
}

impl<W> Sink for WriterSink<W>
where
    W: Write + Send,
{
    fn write_line(&self, line: &str) {
        if self
            .with_writer(|writer| writer.write_all(line.as_bytes()))
            .is_err()
        {
            self.failed.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl<W: fmt::Debug> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("writer", &self.writer)
            .field("failed_writes", &self.failed_writes())
            .finish()
    }
}
