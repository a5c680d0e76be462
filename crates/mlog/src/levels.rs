//! crates/mlog/src/levels.rs
//! Severity levels and the lenient level resolver.
//!
//! Level tokens come from environment variables and embedder configuration,
//! so resolution never fails: anything that is not a canonical name or an
//! in-range integer resolves to the most verbose level. A misconfigured
//! environment over-logs instead of going silent.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseSeverityError;
use crate::format::ansi;

/// Ordered logging priority.
///
/// Lower discriminants are more severe. A message at severity `S` passes an
/// output path whose threshold is `T` when `S <= T`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Severity {
    /// Unrecoverable or unexpected failures.
    #[cfg_attr(feature = "serde", serde(rename = "ERROR", alias = "ERRO"))]
    Error = 0,
    /// Conditions worth an operator's attention.
    #[cfg_attr(feature = "serde", serde(rename = "WARN"))]
    Warn = 1,
    /// Normal progress reports.
    #[cfg_attr(feature = "serde", serde(rename = "INFO"))]
    Info = 2,
    /// Detailed progress reports.
    #[cfg_attr(feature = "serde", serde(rename = "VERB"))]
    Verbose = 3,
    /// Developer diagnostics.
    #[cfg_attr(feature = "serde", serde(rename = "DEBUG", alias = "DEBG"))]
    Debug = 4,
}

/// Canonical names and their aliases, in enumeration order.
const NAMES: [(&str, Severity); 7] = [
    ("ERRO", Severity::Error),
    ("ERROR", Severity::Error),
    ("WARN", Severity::Warn),
    ("INFO", Severity::Info),
    ("VERB", Severity::Verbose),
    ("DEBG", Severity::Debug),
    ("DEBUG", Severity::Debug),
];

impl Severity {
    /// Every severity, most severe first.
    pub const ALL: [Self; 5] = [
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Verbose,
        Self::Debug,
    ];

    /// The level unparseable tokens resolve to.
    pub const MOST_VERBOSE: Self = Self::Debug;

    /// Returns the severity at `index`, or `None` when `index` is past [`Severity::Debug`].
    #[must_use]
    pub const fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(Self::Error),
            1 => Some(Self::Warn),
            2 => Some(Self::Info),
            3 => Some(Self::Verbose),
            4 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Returns the severity at `index`, clamping out-of-range values to [`Severity::Debug`].
    ///
    /// ```
    /// use mlog::Severity;
    ///
    /// assert_eq!(Severity::saturating_from(2), Severity::Info);
    /// assert_eq!(Severity::saturating_from(200), Severity::Debug);
    /// ```
    #[must_use]
    pub const fn saturating_from(index: u64) -> Self {
        match Self::from_index(index) {
            Some(level) => level,
            None => Self::MOST_VERBOSE,
        }
    }

    /// Returns the numeric index of the severity.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Verbose => "VERB",
            Self::Debug => "DEBUG",
        }
    }

    /// Returns the bracketed short tag rendered by [`FormatConfig::LEVEL_HEAD`](crate::FormatConfig::LEVEL_HEAD).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[E]",
            Self::Warn => "[W]",
            Self::Info => "[I]",
            Self::Verbose => "[V]",
            Self::Debug => "[D]",
        }
    }

    /// Returns the ANSI color escape rendered by [`FormatConfig::COLOR`](crate::FormatConfig::COLOR).
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Error => ansi::RED,
            Self::Warn => ansi::YELLOW,
            Self::Info => ansi::GREEN,
            Self::Verbose => ansi::CYAN,
            Self::Debug => ansi::BRIGHT_BLACK,
        }
    }

    /// Reports whether a message at this severity passes `threshold`.
    ///
    /// ```
    /// use mlog::Severity;
    ///
    /// assert!(Severity::Error.passes(Severity::Warn));
    /// assert!(Severity::Warn.passes(Severity::Warn));
    /// assert!(!Severity::Info.passes(Severity::Warn));
    /// ```
    #[must_use]
    pub const fn passes(self, threshold: Self) -> bool {
        self.index() <= threshold.index()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Strict parse accepting only canonical names and aliases.
    ///
    /// Use [`parse`] for the lenient, never-failing resolution applied to
    /// environment values.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        lookup_name(input).ok_or_else(|| ParseSeverityError::new(input))
    }
}

impl From<u8> for Severity {
    /// Clamps `index` into range; see [`Severity::saturating_from`].
    fn from(index: u8) -> Self {
        Self::saturating_from(u64::from(index))
    }
}

impl From<Severity> for u8 {
    fn from(level: Severity) -> Self {
        level.index()
    }
}

fn lookup_name(token: &str) -> Option<Severity> {
    NAMES
        .iter()
        .find(|(name, _)| *name == token)
        .map(|&(_, level)| level)
}

/// Resolves a level token into a [`Severity`].
///
/// Canonical names (`ERROR`/`ERRO`, `WARN`, `INFO`, `VERB`, `DEBUG`/`DEBG`)
/// match case-sensitively. Anything else is read as an unsigned integer in the
/// manner of C `strtoul` with base detection: `0x` selects hex, a leading `0`
/// selects octal, trailing characters after the digits are ignored. Tokens
/// without digits, overflowing or negative values, and indices past
/// [`Severity::Debug`] resolve to [`Severity::Debug`].
///
/// ```
/// use mlog::{levels, Severity};
///
/// assert_eq!(levels::parse("INFO"), Severity::Info);
/// assert_eq!(levels::parse("info"), Severity::Debug);
/// assert_eq!(levels::parse("0x1"), Severity::Warn);
/// assert_eq!(levels::parse("999"), Severity::Debug);
/// ```
#[must_use]
pub fn parse(token: &str) -> Severity {
    if let Some(level) = lookup_name(token) {
        return level;
    }

    parse_unsigned_prefix(token).map_or(Severity::MOST_VERBOSE, Severity::saturating_from)
}

/// Reads the longest unsigned integer prefix of `token`.
///
/// Returns `None` when no digit is consumed, on overflow, and for negative
/// non-zero values (which wrap to the top of the range in C).
fn parse_unsigned_prefix(token: &str) -> Option<u64> {
    let bytes = token.trim_start_matches(|c: char| c.is_ascii_whitespace()).as_bytes();

    let (negative, unsigned) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, bytes),
    };

    let (radix, digits) = match unsigned {
        [b'0', b'x' | b'X', rest @ ..] if rest.first().is_some_and(u8::is_ascii_hexdigit) => {
            (16, rest)
        }
        [b'0', ..] => (8, unsigned),
        _ => (10, unsigned),
    };

    let mut value: u64 = 0;
    let mut consumed = 0usize;
    for &byte in digits {
        let Some(digit) = char::from(byte).to_digit(radix) else {
            break;
        };
        value = value
            .checked_mul(u64::from(radix))?
            .checked_add(u64::from(digit))?;
        consumed += 1;
    }

    if consumed == 0 || (negative && value != 0) {
        return None;
    }
    Some(value)
}

/// Looks up `name` in the environment and resolves its value with [`parse`].
///
/// Returns `None` when `name` is absent, the variable is unset, or its value
/// is empty, so callers keep their prior level.
#[must_use]
pub fn parse_from_env(name: Option<&str>) -> Option<Severity> {
    let name = name?;
    if name.is_empty() || name.contains(['=', '\0']) {
        return None;
    }

    let value = env::var_os(name)?;
    if value.is_empty() {
        return None;
    }

    let value = value.to_string_lossy();
    let level = parse(&value);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "mlog::env",
        variable = name,
        value = %value,
        level = %level,
        "resolved log level from environment"
    );

    Some(level)
}

/// Looks up the diagnostic-path variable.
///
/// Returns the two results of the lookup separately: whether the variable
/// enables the diagnostic path, and the level to use (`fallback` when it does
/// not).
#[must_use]
pub fn diagnostic_from_env(name: Option<&str>, fallback: Severity) -> (bool, Severity) {
    parse_from_env(name).map_or((false, fallback), |level| (true, level))
}
