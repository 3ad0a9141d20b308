//! Paced, strictly sequential request loop.
mod pacing;


use tokio::time::{Instant, sleep};
use tracing::{debug, info, warn};

use crate::analyzer::analyze;
use crate::domain::{ProbeConfig, RunResult};
use crate::http::ProbeTarget;

pub use pacing::{pacing_delay, target_elapsed};

/// A progress line is logged on the first attempt and every this many after it.
pub const PROGRESS_INTERVAL: u64 = 10;
/// Upper bound on the up-front allocation for the result list.
const MAX_PREALLOCATED_ENTRIES: usize = 4096;

/// Sends exactly `max_requests` requests, one at a time, paced so the
/// cumulative rate tracks `requests_per_second`.
///
/// The returned [`RunResult`] always holds one entry per attempt.
pub async fn run_probe<T>(target: &T, config: &ProbeConfig) -> RunResult
where
    T: ProbeTarget + ?Sized,
{
    let max_requests = config.max_requests();
    let requests_per_second = config.requests_per_second();
    info!("Starting rate limiting test against {}", config.url());

    let capacity = usize::try_from(max_requests)
        .unwrap_or(usize::MAX)
        .min(MAX_PREALLOCATED_ENTRIES);
    let mut result = RunResult::with_capacity(capacity);
    let start = Instant::now();

    for attempt in 0..max_requests {
        let completed = attempt.saturating_add(1);
        match target.send().await {
            Ok(response) => {
                let record = analyze(&response);
                debug!(
                    "Request #{} -> {} (remaining: {:?}, retry-after: {:?})",
                    completed,
                    record.status_code,
                    record.x_ratelimit_remaining,
                    record.retry_after
                );
                result.push_record(record);
            }
            Err(failure) => {
                warn!("Request #{} failed, skipping analysis: {}", completed, failure);
                result.push_failure();
            }
        }

        if attempt.checked_rem(PROGRESS_INTERVAL) == Some(0) {
            info!("Sent {} requests", completed);
        }

        if let Some(delay) = pacing_delay(completed, requests_per_second, start.elapsed()) {
            sleep(delay).await;
        }
    }

    result.set_elapsed(start.elapsed());
    info!("Rate limiting test completed.");
    result
}
