use std::time::Duration;

use serde::Serialize;

/// Status codes counted as a server refusing to serve because of load.
pub const BLOCKED_STATUS_CODES: [u16; 2] = [429, 503];

/// Rate-limit related fields captured from one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseRecord {
    pub status_code: u16,
    pub x_ratelimit_limit: Option<String>,
    pub x_ratelimit_remaining: Option<String>,
    pub x_ratelimit_reset: Option<String>,
    pub retry_after: Option<String>,
    pub content_length: Option<String>,
}

impl ResponseRecord {
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        BLOCKED_STATUS_CODES.contains(&self.status_code)
    }

    /// Header fields in report order, paired with their display names.
    #[must_use]
    pub fn header_fields(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("x_ratelimit_limit", self.x_ratelimit_limit.as_deref()),
            ("x_ratelimit_remaining", self.x_ratelimit_remaining.as_deref()),
            ("x_ratelimit_reset", self.x_ratelimit_reset.as_deref()),
            ("retry_after", self.retry_after.as_deref()),
            ("content_length", self.content_length.as_deref()),
        ]
    }
}

/// Ordered outcome of every attempt; `None` marks a failed request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    entries: Vec<Option<ResponseRecord>>,
    elapsed: Duration,
}

impl RunResult {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            elapsed: Duration::ZERO,
        }
    }

    pub fn push_record(&mut self, record: ResponseRecord) {
        self.entries.push(Some(record));
    }

    pub fn push_failure(&mut self) {
        self.entries.push(None);
    }

    pub const fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    #[must_use]
    pub fn entries(&self) -> &[Option<ResponseRecord>] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn records(&self) -> impl Iterator<Item = &ResponseRecord> {
        self.entries.iter().flatten()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_none()).count()
    }

    #[must_use]
    pub fn blocked_count(&self) -> usize {
        self.records().filter(|record| record.is_blocked()).count()
    }
}
