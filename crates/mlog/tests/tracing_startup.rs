//! Startup ordering between the tracing bridge and the global logger.
//!
//! Tracing may be initialised, and may emit, before any logger is installed.
//! The global can only be set once per process, so the whole sequence lives in
//! a single test.

#![cfg(feature = "tracing")]

mod support;

use std::sync::{Arc, Mutex};

use mlog::{FormatConfig, Logger, SharedSink};
use support::{EnvGuard, lock_env};

const LEVEL_VAR: &str = "MLOG_IT_TRACING_LEVEL";

// ============================================================================
// Early Events
// ============================================================================

/// Verifies events emitted before installation are dropped and do not claim
/// the global slot, so a later install succeeds and receives new events.
#[test]
fn install_succeeds_after_early_tracing_output() {
    let _lock = lock_env();
    mlog::init_tracing().expect("tracing subscriber installs");

    tracing::info!("early startup event");

    // Resolving the level from the environment emits its own debug event.
    let _level = EnvGuard::set(LEVEL_VAR, "DEBUG");
    let mut logger = Logger::init(
        Some(LEVEL_VAR),
        None,
        FormatConfig::LEVEL_HEAD,
        FormatConfig::EMPTY,
    );

    let lines: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let store = Arc::clone(&lines);
    let sink: SharedSink = Arc::new(move |line: &str| {
        store.lock().expect("lock").push(line.to_owned());
    });
    logger.set_sink(logger.threshold(), Some(sink));

    assert!(mlog::try_global().is_none());
    assert!(mlog::install(logger).is_ok());

    tracing::warn!("after install");

    let lines = lines.lock().expect("lock");
    assert!(lines.iter().any(|line| line == "[W]after install"));
    assert!(!lines.iter().any(|line| line.contains("early startup event")));
}
