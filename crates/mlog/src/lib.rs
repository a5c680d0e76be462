#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `mlog` is a small leveled logging facility for embedders that want to own
//! their logger state. Each message carries a [`Severity`], passes through up
//! to two output paths, and is rendered into a fixed-size stack buffer before
//! reaching its destination:
//!
//! - the **primary path**: an embedder-supplied [`Sink`] with its own threshold;
//! - the **diagnostic path**: standard error, enabled from an environment
//!   variable, with an independent threshold.
//!
//! Each path decorates lines according to its own [`FormatConfig`]: an ANSI
//! color, a monotonic timestamp, a short level tag and a trailing newline.
//!
//! # Design
//!
//! [`Logger`] is plain data owned by the caller. Whether it lives in a global,
//! a thread-local or a per-subsystem field is the embedder's choice.
//! [`SharedLogger`] wraps it in a read-write lock for concurrent emitters, and
//! [`global()`] offers an opt-in process-wide instance behind the logging
//! macros ([`log_error!`], [`log_warn!`], [`log_info!`], [`log_verbose!`],
//! [`log_debug!`]).
//!
//! Rendering never allocates. [`render::render`] writes into a caller-owned
//! byte buffer through [`writer::LineWriter`], which reserves room for the
//! color reset and newline before the message is appended, so both survive
//! truncation.
//!
//! # Invariants
//!
//! - A message at severity `S` reaches a path whose threshold is `T` only when
//!   the path is active and `S <= T`.
//! - Nothing is formatted when no path accepts a level.
//! - Rendered lines never exceed the scratch buffer capacity; oversized
//!   messages are cut at a UTF-8 character boundary.
//! - Level resolution never fails: unknown tokens resolve to
//!   [`Severity::Debug`].
//!
//! # Errors
//!
//! The logging path does not report errors. Sink write failures are dropped
//! and oversized messages truncate. Configuration helpers return typed errors
//! from [`error`].
//!
//! # Examples
//!
//! Route warnings and worse to a closure, decorated with a level tag:
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use mlog::{FormatConfig, Logger, Severity, SharedSink};
//!
//! let lines = Arc::new(Mutex::new(Vec::new()));
//! let store = Arc::clone(&lines);
//! let sink: SharedSink = Arc::new(move |line: &str| {
//!     store.lock().unwrap().push(line.to_owned());
//! });
//!
//! let mut logger = Logger::new();
//! logger.set_sink(Severity::Warn, Some(sink));
//! logger.set_format(FormatConfig::LEVEL_HEAD | FormatConfig::NEWLINE);
//!
//! logger.emit(Severity::Info, format_args!("ignored"));
//! logger.emit(Severity::Error, format_args!("disk {} failed", 2));
//!
//! assert_eq!(lines.lock().unwrap().as_slice(), ["[E]disk 2 failed\n"]);
//! ```
//!
//! # See also
//!
//! - `mlog-sink` for ready-made stdout, stderr, writer and capture sinks.
//! - [`levels::parse`] for the lenient level resolver.

pub mod clock;
pub mod error;
pub mod format;
mod global;
pub mod levels;
mod macros;
pub mod render;
mod shared;
pub mod sink;
mod state;
#[cfg(feature = "tracing")]
mod tracing_bridge;
pub mod writer;

pub use error::{CapacityError, InstallError, ParseFormatError, ParseSeverityError};
pub use format::FormatConfig;
pub use global::{global, init_global, init_global_from_config, install, try_global};
pub use levels::Severity;
pub use render::{DEFAULT_CAPACITY, MIN_CAPACITY, Rendered, Scratch};
pub use shared::SharedLogger;
pub use sink::{SharedSink, Sink, StderrStream};
pub use state::{Logger, LoggerConfig, ThresholdGuard};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{MlogLayer, init_tracing, init_tracing_with_filter};
