#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/mlog-sink/src/lib.rs
//!
//! # Overview
//!
//! `mlog-sink` provides ready-made [`mlog::Sink`] implementations for the
//! destinations embedders reach for most often: the standard streams, any
//! [`std::io::Write`] implementor, and an in-memory capture used by tests.
//!
//! # Design
//!
//! Sinks receive fully rendered lines and write them verbatim. Decorations,
//! including the trailing newline, are decided by the logger's
//! [`mlog::FormatConfig`], so the sinks here never add or strip bytes.
//! Interior mutability uses [`std::sync::Mutex`] because [`mlog::Sink`] takes
//! `&self` and must be `Send + Sync`.
//!
//! # Invariants
//!
//! - Write failures never panic and never reach the logging call site.
//!   [`WriterSink`] counts them instead.
//! - Poisoned locks are recovered so one panicking sink user cannot silence
//!   every later message.
//!
//! # Examples
//!
//! Send informational messages and worse to standard output:
//!
//! ```
//! use std::sync::Arc;
//! use mlog::{FormatConfig, Logger, Severity};
//! use mlog_sink::StdioSink;
//!
//! let mut logger = Logger::new();
//! logger.set_sink(Severity::Info, Some(Arc::new(StdioSink::stdout())));
//! logger.set_format(FormatConfig::LEVEL_HEAD | FormatConfig::NEWLINE);
//! logger.emit(Severity::Info, format_args!("ready"));
//! ```
//!
//! # See also
//!
//! - [`mlog::Logger`] for thresholds and routing.

mod capture;
mod stdio;
mod writer;

pub use capture::CaptureSink;
pub use stdio::{StdStream, StdioSink};
pub use writer::WriterSink;
