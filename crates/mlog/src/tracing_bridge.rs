//! crates/mlog/src/tracing_bridge.rs
//! Bridge from the tracing crate into an mlog logger.
//!
//! [`MlogLayer`] is a tracing-subscriber layer that maps each event's level to
//! a [`Severity`] and forwards the event's `message` field through a
//! [`SharedLogger`]. Thresholds, sinks and decorations stay under mlog's
//! control; the layer only translates.
//!
//! | tracing | mlog      |
//! |---------|-----------|
//! | ERROR   | `Error`   |
//! | WARN    | `Warn`    |
//! | INFO    | `Info`    |
//! | DEBUG   | `Verbose` |
//! | TRACE   | `Debug`   |
//!
//! ```rust,ignore
//! use mlog::{init_tracing, Logger, Severity};
//!
//! mlog::install(Logger::init(Some("APP_LOG"), None, Default::default(), Default::default()))?;
//! init_tracing()?;
//! tracing::info!("listening on {}", addr);
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::levels::Severity;
use crate::shared::SharedLogger;

enum Destination {
    Global,
    Shared(Arc<SharedLogger>),
}

/// A tracing layer that forwards events into a [`SharedLogger`].
pub struct MlogLayer {
    destination: Destination,
}

impl MlogLayer {
    /// Forwards into the process-wide logger.
    ///
    /// Events that arrive before a logger is installed are dropped, so
    /// [`install`](crate::install) still succeeds after early tracing output.
    #[must_use]
    pub const fn global() -> Self {
        Self {
            destination: Destination::Global,
        }
    }

    /// Forwards into `logger`.
    #[must_use]
    pub const fn new(logger: Arc<SharedLogger>) -> Self {
        Self {
            destination: Destination::Shared(logger),
        }
    }

    fn logger(&self) -> Option<&SharedLogger> {
        match &self.destination {
            Destination::Global => crate::try_global(),
            Destination::Shared(logger) => Some(logger.as_ref()),
        }
    }

    /// Maps a tracing level to a severity.
    #[must_use]
    pub const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warn,
            Level::INFO => Severity::Info,
            Level::DEBUG => Severity::Verbose,
            Level::TRACE => Severity::Debug,
        }
    }
}

impl fmt::Debug for MlogLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let destination = match self.destination {
            Destination::Global => "global",
            Destination::Shared(_) => "shared",
        };
        f.debug_struct("MlogLayer")
            .field("destination", &destination)
            .finish()
    }
}

impl<S> Layer<S> for MlogLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let level = Self::severity_for(event.metadata().level());
        // Skip field collection for events nobody would see.
        let Some(logger) = self.logger().filter(|logger| logger.enabled(level)) else {
            return;
        };

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            logger.emit(level, format_args!("{message}"));
        }
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global tracing subscriber forwarding into the process-wide
/// logger.
///
/// # Errors
///
/// Fails when another global subscriber is already set.
pub fn init_tracing() -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(MlogLayer::global())
        .try_init()
}

/// Same as [`init_tracing`] with an extra filter layer in front, such as an
/// [`EnvFilter`](tracing_subscriber::EnvFilter).
///
/// ```rust,no_run
/// use tracing_subscriber::EnvFilter;
///
/// mlog::init_tracing_with_filter(EnvFilter::new("warn,app::net=debug"))?;
/// # Ok::<(), tracing_subscriber::util::TryInitError>(())
/// ```
///
/// # Errors
///
/// Fails when another global subscriber is already set.
pub fn init_tracing_with_filter<F>(filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(MlogLayer::global())
        .try_init()
}
