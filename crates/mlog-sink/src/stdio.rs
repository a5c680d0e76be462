use std::io::{self, Write};

use mlog::Sink;

/// Standard stream selected by a [`StdioSink`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StdStream {
    /// The process's standard output.
    Stdout,
    /// The process's standard error.
    Stderr,
}

/// Writes each line to standard output or standard error.
///
/// The stream is locked for the duration of one line, so lines from
/// concurrent emitters never interleave. Each line is flushed after writing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StdioSink {
    stream: StdStream,
}

impl StdioSink {
    /// Sink writing to standard output.
    #[must_use]
    pub const fn stdout() -> Self {
        Self {
            stream: StdStream::Stdout,
        }
    }

    /// Sink writing to standard error.
    #[must_use]
    pub const fn stderr() -> Self {
        Self {
            stream: StdStream::Stderr,
        }
    }

    /// Returns the selected stream.
    #[must_use]
    pub const fn stream(&self) -> StdStream {
        self.stream
    }
}

impl Default for StdioSink {
    fn default() -> Self {
        Self::stdout()
    }
}

fn write_locked(mut out: impl Write, line: &str) -> io::Result<()> {
    out.write_all(line.as_bytes())?;
    out.flush()
}

impl Sink for StdioSink {
    fn write_line(&self, line: &str) {
        let _ = match self.stream {
            StdStream::Stdout => write_locked(io::stdout().lock(), line),
            StdStream::Stderr => write_locked(io::stderr().lock(), line),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_select_stream() {
        assert_eq!(StdioSink::stdout().stream(), StdStream::Stdout);
        assert_eq!(StdioSink::stderr().stream(), StdStream::Stderr);
        assert_eq!(StdioSink::default(), StdioSink::stdout());
    }

    #[test]
    fn write_locked_writes_verbatim() {
        let mut out = Vec::new();
        write_locked(&mut out, "[I]ready\n").expect("vec write");
        assert_eq!(out, b"[I]ready\n");
    }

    #[test]
    fn writing_empty_line_is_harmless() {
        StdioSink::stderr().write_line("");
    }
}
