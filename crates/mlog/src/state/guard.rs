use super::Logger;
use crate::levels::Severity;

/// RAII guard that temporarily overrides a [`Logger`]'s primary threshold.
///
/// Created by [`Logger::scoped_threshold`]. Dropping the guard restores the
/// previous threshold. The guard dereferences to the logger so messages can be
/// emitted through it.
///
/// ```
/// use mlog::{Logger, Severity};
///
/// let mut logger = Logger::new();
/// {
///     let guard = logger.scoped_threshold(Severity::Debug);
///     assert_eq!(guard.threshold(), Severity::Debug);
/// }
/// assert_eq!(logger.threshold(), Severity::Error);
/// ```
#[must_use = "dropping the guard immediately restores the previous threshold"]
pub struct ThresholdGuard<'a> {
    logger: Option<&'a mut Logger>,
    previous: Severity,
}

impl<'a> ThresholdGuard<'a> {
    pub(super) const fn new(logger: &'a mut Logger, previous: Severity) -> Self {
        Self {
            logger: Some(logger),
            previous,
        }
    }

    /// Returns the threshold restored on drop.
    #[must_use]
    pub const fn previous_threshold(&self) -> Severity {
        self.previous
    }

    /// Consumes the guard, keeping the override as the logger's threshold.
    pub fn into_inner(mut self) -> &'a mut Logger {
        self.logger
            .take()
            .expect("threshold guard must own a logger")
    }
}

impl Drop for ThresholdGuard<'_> {
    fn drop(&mut self) {
        if let Some(logger) = self.logger.take() {
            logger.primary_threshold = self.previous;
        }
    }
}

impl std::ops::Deref for ThresholdGuard<'_> {
    type Target = Logger;

    fn deref(&self) -> &Self::Target {
        self.logger
            .as_deref()
            .expect("threshold guard remains active while borrowed")
    }
}

impl std::ops::DerefMut for ThresholdGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.logger
            .as_deref_mut()
            .expect("threshold guard remains active while borrowed")
    }
}
