//! crates/mlog/src/format.rs
//! Decoration flags applied while rendering a line.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use std::str::FromStr;

use crate::error::ParseFormatError;

/// ANSI escape sequences used by [`FormatConfig::COLOR`].
pub mod ansi {
    /// Restores default attributes.
    pub const RESET: &str = "\x1b[0m";
    /// Bold emphasis, added to [`Severity::Error`](crate::Severity::Error) lines.
    pub const BOLD: &str = "\x1b[1m";
    /// Red foreground.
    pub const RED: &str = "\x1b[31m";
    /// Green foreground.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow foreground.
    pub const YELLOW: &str = "\x1b[33m";
    /// Cyan foreground.
    pub const CYAN: &str = "\x1b[36m";
    /// Bright black (grey) foreground.
    pub const BRIGHT_BLACK: &str = "\x1b[90m";
}

/// Bit set selecting the optional decorations of a rendered line.
///
/// Every bit pattern is accepted. Bits without a defined meaning are carried
/// along and ignored by the renderer.
///
/// ```
/// use mlog::FormatConfig;
///
/// let cfg = FormatConfig::LEVEL_HEAD | FormatConfig::NEWLINE;
/// assert!(cfg.contains(FormatConfig::NEWLINE));
/// assert!(!cfg.contains(FormatConfig::COLOR));
/// assert_eq!(cfg.to_string(), "head|newline");
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FormatConfig {
    bits: u8,
}

impl FormatConfig {
    const fn new(bits: u8) -> Self {
        Self { bits }
    }

    /// No decorations: the rendered line is the user message.
    pub const EMPTY: Self = Self::new(0);
    /// Wrap the line in the level color and a closing reset.
    pub const COLOR: Self = Self::new(1 << 0);
    /// Prefix the line with `[<hex microseconds>]` from the monotonic clock.
    pub const TIMESTAMP: Self = Self::new(1 << 1);
    /// Prefix the message with the level tag, e.g. `[W]`.
    pub const LEVEL_HEAD: Self = Self::new(1 << 2);
    /// Terminate the line with `\n`.
    pub const NEWLINE: Self = Self::new(1 << 3);

    /// Every defined decoration.
    pub const ALL: Self = Self::new(Self::KNOWN_MASK);

    const KNOWN_MASK: u8 =
        Self::COLOR.bits | Self::TIMESTAMP.bits | Self::LEVEL_HEAD.bits | Self::NEWLINE.bits;

    const NAMED: [(Self, &'static str); 4] = [
        (Self::COLOR, "color"),
        (Self::TIMESTAMP, "timestamp"),
        (Self::LEVEL_HEAD, "head"),
        (Self::NEWLINE, "newline"),
    ];

    /// Returns a configuration built from raw `bits` without masking.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self { bits }
    }

    /// Returns the raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.bits
    }

    /// Returns `true` when no bit is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Checks whether every flag in `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Returns the union of both operands.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::new(self.bits | other.bits)
    }

    /// Returns the bits common to both operands.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self::new(self.bits & other.bits)
    }

    /// Returns the bits of `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self::new(self.bits & !other.bits)
    }

    /// Returns the bits with no defined meaning.
    #[must_use]
    pub const fn unknown_bits(self) -> u8 {
        self.bits & !Self::KNOWN_MASK
    }
}

impl fmt::Debug for FormatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatConfig")
            .field("bits", &format_args!("0x{:x}", self.bits))
            .finish()
    }
}

impl fmt::Display for FormatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }

        let mut first = true;
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                first = false;
                f.write_str(name)?;
            }
        }

        let unknown = self.unknown_bits();
        if unknown != 0 {
            if !first {
                f.write_str("|")?;
            }
            write!(f, "unknown(0x{unknown:x})")?;
        }

        Ok(())
    }
}

impl FromStr for FormatConfig {
    type Err = ParseFormatError;

    /// Parses a comma or pipe separated list of decoration names.
    ///
    /// Accepted names (case-insensitive): `color`, `timestamp`/`time`,
    /// `head`/`level`, `newline`/`nl`, `all` and `none`. Blank items are
    /// skipped, so an empty string parses to [`FormatConfig::EMPTY`].
    ///
    /// ```
    /// use mlog::FormatConfig;
    ///
    /// let cfg: FormatConfig = "time, head | nl".parse().unwrap();
    /// assert_eq!(
    ///     cfg,
    ///     FormatConfig::TIMESTAMP | FormatConfig::LEVEL_HEAD | FormatConfig::NEWLINE
    /// );
    /// assert!("sparkles".parse::<FormatConfig>().is_err());
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut cfg = Self::EMPTY;
        for item in input.split([',', '|']).map(str::trim) {
            if item.is_empty() {
                continue;
            }

            let flag = match item.to_ascii_lowercase().as_str() {
                "color" | "colour" => Self::COLOR,
                "timestamp" | "time" => Self::TIMESTAMP,
                "head" | "level" => Self::LEVEL_HEAD,
                "newline" | "nl" => Self::NEWLINE,
                "all" => Self::ALL,
                "none" => Self::EMPTY,
                _ => return Err(ParseFormatError::new(item)),
            };
            cfg |= flag;
        }
        Ok(cfg)
    }
}

impl Not for FormatConfig {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::new(!self.bits)
    }
}

impl BitOr for FormatConfig {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for FormatConfig {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for FormatConfig {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl BitAndAssign for FormatConfig {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitXor for FormatConfig {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::new(self.bits ^ rhs.bits)
    }
}

impl BitXorAssign for FormatConfig {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.bits ^= rhs.bits;
    }
}

impl From<u8> for FormatConfig {
    fn from(bits: u8) -> Self {
        Self::from_bits(bits)
    }
}

impl From<FormatConfig> for u8 {
    fn from(cfg: FormatConfig) -> Self {
        cfg.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_independent_bits() {
        let flags = [
            FormatConfig::COLOR,
            FormatConfig::TIMESTAMP,
            FormatConfig::LEVEL_HEAD,
            FormatConfig::NEWLINE,
        ];
        for (i, a) in flags.iter().enumerate() {
            assert_eq!(a.bits().count_ones(), 1);
            for b in &flags[i + 1..] {
                assert!(a.intersection(*b).is_empty());
            }
        }
        assert_eq!(FormatConfig::ALL.bits(), 0x0f);
    }

    #[test]
    fn set_algebra_behaves() {
        let mut cfg = FormatConfig::COLOR | FormatConfig::NEWLINE;
        assert!(cfg.contains(FormatConfig::COLOR));
        assert!(!cfg.contains(FormatConfig::ALL));

        cfg &= !FormatConfig::COLOR;
        assert_eq!(cfg, FormatConfig::NEWLINE);

        cfg ^= FormatConfig::NEWLINE;
        assert!(cfg.is_empty());

        assert_eq!(
            FormatConfig::ALL.difference(FormatConfig::TIMESTAMP),
            FormatConfig::COLOR | FormatConfig::LEVEL_HEAD | FormatConfig::NEWLINE
        );
    }

    #[test]
    fn arbitrary_bit_patterns_are_preserved() {
        let cfg = FormatConfig::from_bits(0xf1);
        assert_eq!(cfg.bits(), 0xf1);
        assert_eq!(cfg.unknown_bits(), 0xf0);
        assert!(cfg.contains(FormatConfig::COLOR));
        assert_eq!(cfg.to_string(), "color|unknown(0xf0)");
    }

    #[test]
    fn display_lists_names_in_bit_order() {
        assert_eq!(FormatConfig::EMPTY.to_string(), "none");
        assert_eq!(
            FormatConfig::ALL.to_string(),
            "color|timestamp|head|newline"
        );
    }

    #[test]
    fn parse_accepts_display_output() {
        for bits in 0..=0x0f {
            let cfg = FormatConfig::from_bits(bits);
            assert_eq!(cfg.to_string().parse::<FormatConfig>(), Ok(cfg));
        }
    }

    #[test]
    fn parse_reports_the_unknown_item() {
        let err = "color,blink".parse::<FormatConfig>().unwrap_err();
        assert_eq!(err.item(), "blink");
        assert_eq!("".parse::<FormatConfig>(), Ok(FormatConfig::EMPTY));
        assert_eq!("ALL".parse::<FormatConfig>(), Ok(FormatConfig::ALL));
    }
}
