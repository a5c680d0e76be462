//! crates/mlog/src/error.rs
//! Error types returned by the configuration helpers.
//!
//! The logging path itself never returns errors; only strict parsing,
//! capacity validation and global installation are fallible.

/// Error returned by the strict [`FromStr`](std::str::FromStr) implementation of
/// [`Severity`](crate::Severity).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognised log level name: {token:?}")]
pub struct ParseSeverityError {
    token: String,
}

impl ParseSeverityError {
    pub(crate) fn new(token: &str) -> Self {
        Self {
            token: token.to_owned(),
        }
    }

    /// Returns the rejected token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Error returned when a decoration list contains an unknown name.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown format flag: {item:?}")]
pub struct ParseFormatError {
    item: String,
}

impl ParseFormatError {
    pub(crate) fn new(item: &str) -> Self {
        Self {
            item: item.to_owned(),
        }
    }

    /// Returns the rejected list item.
    #[must_use]
    pub fn item(&self) -> &str {
        &self.item
    }
}

/// Error returned by [`check_capacity`](crate::render::check_capacity).
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("scratch buffer of {capacity} bytes is below the {minimum}-byte minimum")]
pub struct CapacityError {
    /// Rejected capacity.
    pub capacity: usize,
    /// Smallest accepted capacity.
    pub minimum: usize,
}

/// Error returned when the process-wide logger is installed twice.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("the global logger is already installed")]
pub struct InstallError;
