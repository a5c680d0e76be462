//! crates/mlog/src/clock.rs
//! Monotonic microsecond clock used by [`FormatConfig::TIMESTAMP`](crate::FormatConfig::TIMESTAMP).

/// Returns microseconds on the system monotonic clock.
///
/// Computed as `seconds * 1_000_000 + nanoseconds / 1_000` from
/// `clock_gettime(CLOCK_MONOTONIC)`. Returns `0` if the clock is unavailable.
#[cfg(unix)]
#[allow(unsafe_code)]
#[must_use]
pub fn monotonic_micros() -> u64 {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    // SAFETY: `ts` is a valid, writable timespec for the duration of the call.
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &raw mut ts) };
    if rc != 0 {
        return 0;
    }

    let secs = u64::try_from(ts.tv_sec).unwrap_or(0);
    let nanos = u64::try_from(ts.tv_nsec).unwrap_or(0);
    secs.wrapping_mul(1_000_000).wrapping_add(nanos / 1_000)
}

/// Returns microseconds elapsed since the first call in this process.
#[cfg(not(unix))]
#[must_use]
pub fn monotonic_micros() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    let elapsed = ORIGIN.get_or_init(Instant::now).elapsed();
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
