//! crates/mlog/src/writer.rs
//! Bounded append-only line builder over a caller-owned byte buffer.

use std::fmt;

/// Append-only writer that can never advance past its limit.
///
/// The limit starts at the buffer length. [`reserve_tail`](Self::reserve_tail)
/// withholds bytes from the end so a suffix written after
/// [`release_tail`](Self::release_tail) is guaranteed to fit no matter how much
/// was appended in between. Writes that do not fit are cut at the last UTF-8
/// character boundary that does, so the contents are always valid `str`.
///
/// ```
/// use mlog::writer::LineWriter;
///
/// let mut buf = [0u8; 8];
/// let mut line = LineWriter::new(&mut buf);
/// assert!(line.reserve_tail(1));
/// assert!(!line.push_str("overlong"));
/// line.release_tail(1);
/// assert!(line.push_str("\n"));
/// assert_eq!(line.as_str(), "overlon\n");
/// assert!(line.truncated());
/// ```
#[derive(Debug)]
pub struct LineWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
    limit: usize,
    truncated: bool,
}

impl<'a> LineWriter<'a> {
    /// Creates an empty writer spanning all of `buf`.
    #[must_use]
    pub fn new(buf: &'a mut [u8]) -> Self {
        let limit = buf.len();
        Self {
            buf,
            len: 0,
            limit,
            truncated: false,
        }
    }

    /// Returns the size of the underlying buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when nothing has been written.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the bytes still writable before the current limit.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.limit - self.len
    }

    /// Returns `true` once any write has been cut short.
    #[must_use]
    pub const fn truncated(&self) -> bool {
        self.truncated
    }

    /// Withholds `bytes` from the end of the buffer.
    ///
    /// Returns `false`, leaving the limit unchanged, when fewer than `bytes`
    /// are still writable.
    pub fn reserve_tail(&mut self, bytes: usize) -> bool {
        if self.remaining() < bytes {
            return false;
        }
        self.limit -= bytes;
        true
    }

    /// Makes `bytes` of a previous reservation writable again.
    pub fn release_tail(&mut self, bytes: usize) {
        self.limit = self.limit.saturating_add(bytes).min(self.buf.len());
    }

    /// Appends as much of `s` as fits.
    ///
    /// Returns `true` when `s` was appended in full.
    pub fn push_str(&mut self, s: &str) -> bool {
        let room = self.remaining();
        let take = if s.len() <= room {
            s.len()
        } else {
            let mut end = room;
            while !s.is_char_boundary(end) {
                end -= 1;
            }
            end
        };

        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;

        if take < s.len() {
            self.truncated = true;
            false
        } else {
            true
        }
    }

    /// Returns the written contents.
    #[must_use]
    pub fn as_str(&self) -> &str {
        written_str(&self.buf[..self.len])
    }

    /// Consumes the writer and returns the written contents with the buffer's lifetime.
    #[must_use]
    pub fn into_str(self) -> &'a str {
        let buf: &'a [u8] = self.buf;
        written_str(&buf[..self.len])
    }
}

// Only whole `str` prefixes cut on char boundaries are ever copied in.
fn written_str(bytes: &[u8]) -> &str {
    match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => std::str::from_utf8(&bytes[..err.valid_up_to()]).unwrap_or_default(),
    }
}

impl fmt::Write for LineWriter<'_> {
    /// Fails once the writer is full so formatting stops at the first cut.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Err(fmt::Error);
        }
        if self.push_str(s) {
            Ok(())
        } else {
            Err(fmt::Error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;

    #[test]
    fn writes_within_capacity_are_exact() {
        let mut buf = [0u8; 16];
        let mut line = LineWriter::new(&mut buf);
        assert!(line.push_str("abc"));
        write!(line, "-{}-", 42).expect("fits");
        assert_eq!(line.as_str(), "abc-42-");
        assert_eq!(line.len(), 7);
        assert_eq!(line.remaining(), 9);
        assert!(!line.truncated());
    }

    #[test]
    fn overflow_truncates_to_fill_exactly() {
        let mut buf = [0u8; 5];
        let mut line = LineWriter::new(&mut buf);
        assert!(write!(line, "{}", "0123456789").is_err());
        assert_eq!(line.as_str(), "01234");
        assert_eq!(line.remaining(), 0);
        assert!(line.truncated());
    }

    #[test]
    fn truncation_backs_off_to_char_boundary() {
        let mut buf = [0u8; 4];
        let mut line = LineWriter::new(&mut buf);
        // 'é' is two bytes; only one fits after "abc".
        assert!(!line.push_str("abcé"));
        assert_eq!(line.as_str(), "abc");
        assert_eq!(line.remaining(), 1);
    }

    #[test]
    fn formatting_stops_after_first_cut() {
        let mut buf = [0u8; 4];
        let mut line = LineWriter::new(&mut buf);
        assert!(line.push_str("ab"));
        assert!(line.write_str("é€").is_err());
        // A later fragment that would fit is still refused.
        assert!(line.write_str("z").is_err());
        assert_eq!(line.as_str(), "abé");
    }

    #[test]
    fn reservations_guarantee_suffix_room() {
        let mut buf = [0u8; 6];
        let mut line = LineWriter::new(&mut buf);
        assert!(line.reserve_tail(2));
        assert!(!line.push_str("xxxxxxxx"));
        assert_eq!(line.len(), 4);

        line.release_tail(2);
        assert!(line.push_str("!\n"));
        assert_eq!(line.as_str(), "xxxx!\n");
    }

    #[test]
    fn oversized_reservation_is_refused() {
        let mut buf = [0u8; 2];
        let mut line = LineWriter::new(&mut buf);
        assert!(!line.reserve_tail(3));
        assert_eq!(line.remaining(), 2);
    }

    #[test]
    fn release_never_exceeds_buffer() {
        let mut buf = [0u8; 3];
        let mut line = LineWriter::new(&mut buf);
        line.release_tail(10);
        assert!(!line.push_str("abcd"));
        assert_eq!(line.into_str(), "abc");
    }
}
