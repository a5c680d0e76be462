//! Property tests for bounded rendering.
//!
//! Whatever the decoration set, level, timestamp and message, a rendered line
//! fits its buffer and keeps its epilogue (color reset, newline) intact.

use mlog::format::ansi;
use mlog::render::{self, MIN_CAPACITY};
use mlog::{FormatConfig, Scratch, Severity};
use proptest::prelude::*;

fn any_format() -> impl Strategy<Value = FormatConfig> {
    (0u8..=0x0f).prop_map(FormatConfig::from_bits)
}

fn any_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

proptest! {
    /// Verifies rendered length never exceeds the buffer capacity.
    #[test]
    fn rendered_length_is_bounded(
        cfg in any_format(),
        level in any_severity(),
        timestamp in any::<u64>(),
        capacity in MIN_CAPACITY..=256usize,
        message in "\\PC{0,400}",
    ) {
        let mut buf = vec![0u8; capacity];
        let line = render::render_at(cfg, level, timestamp, &mut buf, format_args!("{message}"));
        prop_assert!(line.len() <= capacity);
    }

    /// Verifies NEWLINE always terminates the line, truncated or not.
    #[test]
    fn newline_survives_truncation(
        cfg in any_format(),
        level in any_severity(),
        message in "\\PC{0,400}",
    ) {
        let cfg = cfg | FormatConfig::NEWLINE;
        let mut buf = [0u8; MIN_CAPACITY];
        let line = render::render_at(cfg, level, 0, &mut buf, format_args!("{message}"));
        prop_assert!(line.as_str().ends_with('\n'));
    }

    /// Verifies COLOR leaves the reset as the last content before any newline.
    #[test]
    fn color_reset_survives_truncation(
        cfg in any_format(),
        level in any_severity(),
        message in "\\PC{0,400}",
    ) {
        let cfg = cfg | FormatConfig::COLOR;
        let mut buf = [0u8; MIN_CAPACITY];
        let line = render::render_at(cfg, level, 0, &mut buf, format_args!("{message}"));
        let body = line.as_str().strip_suffix('\n').unwrap_or(line.as_str());
        prop_assert!(body.ends_with(ansi::RESET));
        prop_assert!(body.starts_with(level.color()) || cfg.contains(FormatConfig::TIMESTAMP));
    }

    /// Verifies undecorated output is the message itself, or a prefix of it
    /// flagged as truncated.
    #[test]
    fn undecorated_output_is_message_prefix(
        level in any_severity(),
        message in "\\PC{0,200}",
    ) {
        let mut scratch = Scratch::<128>::new();
        let line = scratch.render(FormatConfig::EMPTY, level, format_args!("{message}"));
        prop_assert!(message.starts_with(line.as_str()));
        prop_assert_eq!(line.truncated(), line.as_str() != message);
        if message.len() <= 128 {
            prop_assert_eq!(line.as_str(), message.as_str());
        }
    }
}

/// Verifies multi-byte characters are never split at the truncation point.
#[test]
fn truncation_respects_char_boundaries() {
    let message = "é".repeat(100);
    let mut buf = [0u8; MIN_CAPACITY + 1];
    let line = render::render_at(
        FormatConfig::EMPTY,
        Severity::Info,
        0,
        &mut buf,
        format_args!("{message}"),
    );

    assert!(line.truncated());
    assert_eq!(line.len(), MIN_CAPACITY);
    assert!(line.as_str().chars().all(|c| c == 'é'));
}
