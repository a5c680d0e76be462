//! crates/mlog/src/render.rs
//! Renders one decorated log line into a fixed-capacity buffer.
//!
//! # Layout
//!
//! ```text
//! [<hex µs>] <color> [L] <bold> message <reset> \n
//! ```
//!
//! Each decoration is present only when its [`FormatConfig`] flag is set (bold
//! only for [`Severity::Error`] lines with color). The trailing reset and
//! newline are reserved before anything else is written, so a message that
//! overflows the buffer is cut but the line is always terminated.

use std::fmt::{self, Write as _};

use crate::clock;
use crate::error::CapacityError;
use crate::format::{FormatConfig, ansi};
use crate::levels::Severity;
use crate::writer::LineWriter;

/// Scratch capacity used by [`Logger::emit`](crate::Logger::emit).
pub const DEFAULT_CAPACITY: usize = 1024;

/// Smallest accepted scratch capacity.
pub const MIN_CAPACITY: usize = 64;

const fn longest(values: &[&str]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < values.len() {
        if values[i].len() > max {
            max = values[i].len();
        }
        i += 1;
    }
    max
}

/// `[` + 16 hex digits + `]`.
const TIMESTAMP_MAX: usize = 2 + 16;

/// Bytes taken by every decoration at once, in the worst case.
pub const DECORATION_MAX: usize = TIMESTAMP_MAX
    + longest(&[
        Severity::Error.color(),
        Severity::Warn.color(),
        Severity::Info.color(),
        Severity::Verbose.color(),
        Severity::Debug.color(),
    ])
    + longest(&[
        Severity::Error.tag(),
        Severity::Warn.tag(),
        Severity::Info.tag(),
        Severity::Verbose.tag(),
        Severity::Debug.tag(),
    ])
    + ansi::BOLD.len()
    + ansi::RESET.len()
    + 1;

const _: () = assert!(DECORATION_MAX <= MIN_CAPACITY);

/// A rendered line borrowed from its scratch buffer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rendered<'a> {
    text: &'a str,
    truncated: bool,
}

impl<'a> Rendered<'a> {
    /// Returns the rendered line.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.text
    }

    /// Returns `true` when the user message was cut to fit the buffer.
    #[must_use]
    pub const fn truncated(&self) -> bool {
        self.truncated
    }

    /// Returns the rendered length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` for an empty line.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Validates a runtime-sized scratch buffer length.
pub fn check_capacity(capacity: usize) -> Result<(), CapacityError> {
    if capacity < MIN_CAPACITY {
        return Err(CapacityError {
            capacity,
            minimum: MIN_CAPACITY,
        });
    }
    Ok(())
}

/// Renders `args` at `level` into `buf`, reading the monotonic clock when
/// [`FormatConfig::TIMESTAMP`] is set.
///
/// `buf` must hold at least [`MIN_CAPACITY`] bytes; smaller buffers trip a
/// debug assertion and, in release builds, lose decorations instead of
/// overflowing.
///
/// ```
/// use mlog::{render, FormatConfig, Severity};
///
/// let mut buf = [0u8; 64];
/// let line = render::render(
///     FormatConfig::LEVEL_HEAD | FormatConfig::NEWLINE,
///     Severity::Warn,
///     &mut buf,
///     format_args!("disk at {}%", 91),
/// );
/// assert_eq!(line.as_str(), "[W]disk at 91%\n");
/// ```
pub fn render<'a>(
    cfg: FormatConfig,
    level: Severity,
    buf: &'a mut [u8],
    args: fmt::Arguments<'_>,
) -> Rendered<'a> {
    let timestamp = if cfg.contains(FormatConfig::TIMESTAMP) {
        clock::monotonic_micros()
    } else {
        0
    };
    render_at(cfg, level, timestamp, buf, args)
}

/// Same as [`render`] with an explicit timestamp in microseconds.
pub fn render_at<'a>(
    cfg: FormatConfig,
    level: Severity,
    timestamp_us: u64,
    buf: &'a mut [u8],
    args: fmt::Arguments<'_>,
) -> Rendered<'a> {
    debug_assert!(
        buf.len() >= MIN_CAPACITY,
        "scratch buffer of {} bytes is below the {MIN_CAPACITY}-byte minimum",
        buf.len()
    );

    let color = cfg.contains(FormatConfig::COLOR);
    let newline = cfg.contains(FormatConfig::NEWLINE);
    let mut line = LineWriter::new(buf);

    let newline_reserved = newline && line.reserve_tail(1);
    let reset_reserved = color && line.reserve_tail(ansi::RESET.len());

    if cfg.contains(FormatConfig::TIMESTAMP) {
        let _ = write!(line, "[{timestamp_us:x}]");
    }
    if color {
        line.push_str(level.color());
    }
    if cfg.contains(FormatConfig::LEVEL_HEAD) {
        line.push_str(level.tag());
    }
    if color && level == Severity::Error {
        line.push_str(ansi::BOLD);
    }

    let _ = line.write_fmt(args);

    if color {
        if reset_reserved {
            line.release_tail(ansi::RESET.len());
        }
        line.push_str(ansi::RESET);
    }
    if newline {
        if newline_reserved {
            line.release_tail(1);
        }
        line.push_str("\n");
    }

    let truncated = line.truncated();
    Rendered {
        text: line.into_str(),
        truncated,
    }
}

/// Fixed-capacity scratch buffer for one rendered line.
///
/// The capacity is checked at compile time: instantiating `Scratch<N>` with
/// `N < MIN_CAPACITY` fails to build.
#[derive(Clone, Debug)]
pub struct Scratch<const N: usize = DEFAULT_CAPACITY> {
    buf: [u8; N],
}

impl<const N: usize> Scratch<N> {
    const CAPACITY_OK: () = assert!(N >= MIN_CAPACITY, "scratch capacity below MIN_CAPACITY");

    /// Creates a zeroed scratch buffer.
    #[must_use]
    pub const fn new() -> Self {
        let () = Self::CAPACITY_OK;
        Self { buf: [0; N] }
    }

    /// Returns `N`.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Renders into this buffer; see [`render`].
    pub fn render(
        &mut self,
        cfg: FormatConfig,
        level: Severity,
        args: fmt::Arguments<'_>,
    ) -> Rendered<'_> {
        render(cfg, level, &mut self.buf, args)
    }
}

impl<const N: usize> Default for Scratch<N> {
    fn default() -> Self {
        Self::new()
    }
}
