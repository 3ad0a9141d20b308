use std::time::Duration;

use serde::Serialize;

use crate::domain::RunResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    RateLimitingDetected,
    NoRateLimitingObserved,
}

impl Verdict {
    #[must_use]
    pub const fn from_blocked(blocked_requests: usize) -> Self {
        if blocked_requests > 0 {
            Verdict::RateLimitingDetected
        } else {
            Verdict::NoRateLimitingObserved
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Verdict::RateLimitingDetected => "Possible Rate Limiting Detected.",
            Verdict::NoRateLimitingObserved => "No Rate Limiting Appears to be in Effect.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_requests: usize,
    pub blocked_requests: usize,
    pub failed_requests: usize,
    pub elapsed_ms: u64,
    /// Achieved requests per second, scaled by 100.
    pub achieved_rps_x100: u64,
    pub verdict: Verdict,
}

#[must_use]
pub fn summarize(result: &RunResult) -> Summary {
    let total_requests = result.len();
    let blocked_requests = result.blocked_count();
    let failed_requests = result.failed_count();

    Summary {
        total_requests,
        blocked_requests,
        failed_requests,
        elapsed_ms: u64::try_from(result.elapsed().as_millis()).unwrap_or(u64::MAX),
        achieved_rps_x100: achieved_rps_x100(total_requests, result.elapsed()),
        verdict: Verdict::from_blocked(blocked_requests),
    }
}

fn achieved_rps_x100(total: usize, elapsed: Duration) -> u64 {
    let duration_ms = elapsed.as_millis().max(1);
    let total = u128::try_from(total).unwrap_or(u128::MAX);
    let scaled = total
        .saturating_mul(100_000)
        .checked_div(duration_ms)
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}
