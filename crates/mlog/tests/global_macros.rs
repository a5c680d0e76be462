//! Integration tests for the process-wide logger and the logging macros.
//!
//! The global can only be installed once per process, so every test goes
//! through [`installed`] and looks for its own message text.

use std::sync::{Arc, Mutex, OnceLock};

use mlog::{
    FormatConfig, InstallError, Logger, Severity, SharedSink, log_debug, log_error, log_info,
    log_verbose, log_warn,
};

type Lines = Arc<Mutex<Vec<String>>>;

fn installed() -> &'static Lines {
    static LINES: OnceLock<Lines> = OnceLock::new();
    LINES.get_or_init(|| {
        let lines: Lines = Arc::new(Mutex::new(Vec::new()));
        let store = Arc::clone(&lines);
        let sink: SharedSink = Arc::new(move |line: &str| {
            store.lock().expect("lock").push(line.to_owned());
        });

        let mut logger = Logger::new();
        logger.set_sink(Severity::Verbose, Some(sink));
        logger.set_format(FormatConfig::LEVEL_HEAD);
        mlog::install(logger).expect("first install succeeds");
        lines
    })
}

fn recorded(needle: &str) -> Vec<String> {
    installed()
        .lock()
        .expect("lock")
        .iter()
        .filter(|line| line.contains(needle))
        .cloned()
        .collect()
}

// ============================================================================
// Installation
// ============================================================================

/// Verifies a second installation is rejected and the first stays active.
#[test]
fn second_install_is_rejected() {
    installed();
    assert_eq!(mlog::install(Logger::new()).err(), Some(InstallError));
    assert_eq!(mlog::global().snapshot().threshold(), Severity::Verbose);
    assert!(mlog::try_global().is_some());
}

// ============================================================================
// Macro Routing
// ============================================================================

/// Verifies level macros route through the global logger with their tag.
#[test]
fn level_macros_use_global_logger() {
    installed();
    log_error!("global-levels {}", "error");
    log_warn!("global-levels warn");
    log_info!("global-levels info");
    log_verbose!("global-levels verbose");

    assert_eq!(
        recorded("global-levels"),
        [
            "[E]global-levels error",
            "[W]global-levels warn",
            "[I]global-levels info",
            "[V]global-levels verbose",
        ]
    );
}

/// Verifies messages past the global threshold are dropped.
#[test]
fn global_threshold_filters_macros() {
    installed();
    log_debug!("global-filtered debug");
    assert!(recorded("global-filtered").is_empty());
    assert!(!mlog::global().enabled(Severity::Debug));
}

/// Verifies the generic macro accepts a runtime severity.
#[test]
fn generic_macro_accepts_runtime_level() {
    installed();
    let level = mlog::levels::parse("2");
    mlog::mlog!(level, "global-runtime at {level}");
    assert_eq!(recorded("global-runtime"), ["[I]global-runtime at INFO"]);
}

/// Verifies an explicit logger bypasses the global.
#[test]
fn explicit_logger_bypasses_global() {
    installed();
    let local: Lines = Arc::new(Mutex::new(Vec::new()));
    let store = Arc::clone(&local);
    let sink: SharedSink = Arc::new(move |line: &str| {
        store.lock().expect("lock").push(line.to_owned());
    });
    let mut logger = Logger::new();
    logger.set_sink(Severity::Debug, Some(sink));

    log_debug!(logger: logger, "global-bypass");
    assert_eq!(*local.lock().expect("lock"), ["global-bypass"]);
    assert!(recorded("global-bypass").is_empty());
}
