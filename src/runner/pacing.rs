use std::time::Duration;

/// Time the first `completed` requests should take at `requests_per_second`.
#[must_use]
pub fn target_elapsed(completed: u64, requests_per_second: u32) -> Duration {
    Duration::from_secs(completed)
        .checked_div(requests_per_second)
        .unwrap_or(Duration::ZERO)
}

/// Sleep needed before the next attempt, or `None` when the run is behind schedule.
///
/// Measured against the run start, so latency of earlier requests shortens
/// the delays that follow.
#[must_use]
pub fn pacing_delay(
    completed: u64,
    requests_per_second: u32,
    actual_elapsed: Duration,
) -> Option<Duration> {
    target_elapsed(completed, requests_per_second)
        .checked_sub(actual_elapsed)
        .filter(|delay| !delay.is_zero())
}
