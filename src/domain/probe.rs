use std::time::Duration;

use reqwest::header::HeaderValue;
use url::Url;

use crate::args::{DEFAULT_USER_AGENT, PositiveU32, PositiveU64};
use crate::error::ValidationError;

const ALLOWED_SCHEME_PREFIXES: [&str; 2] = ["http://", "https://"];

/// How a completed exchange with a non-2xx status is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Every completed exchange is analyzed, whatever its status.
    Analyze,
    /// Non-2xx statuses count as failed requests and are never analyzed.
    FailNonSuccess,
}

impl StatusPolicy {
    #[must_use]
    pub const fn from_fail_flag(fail_on_error_status: bool) -> Self {
        if fail_on_error_status {
            StatusPolicy::FailNonSuccess
        } else {
            StatusPolicy::Analyze
        }
    }
}

/// Validated, immutable settings for one probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    url: Url,
    requests_per_second: PositiveU32,
    max_requests: PositiveU64,
    timeout: Duration,
    user_agent: String,
    status_policy: StatusPolicy,
}

impl ProbeConfig {
    /// Validates the target and builds the run configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL does not start with `http://` or
    /// `https://`, cannot be parsed, or has no host, when the timeout is zero,
    /// or when the User-Agent is not a valid header value. A blank User-Agent
    /// falls back to the default.
    pub fn new(
        url: &str,
        requests_per_second: PositiveU32,
        max_requests: PositiveU64,
        timeout: Duration,
        user_agent: Option<String>,
        status_policy: StatusPolicy,
    ) -> Result<Self, ValidationError> {
        let url = parse_target_url(url)?;
        if timeout.is_zero() {
            return Err(ValidationError::DurationZero);
        }
        let user_agent = user_agent
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());
        HeaderValue::from_str(&user_agent).map_err(|err| ValidationError::InvalidUserAgent {
            value: user_agent.clone(),
            source: err,
        })?;

        Ok(Self {
            url,
            requests_per_second,
            max_requests,
            timeout,
            user_agent,
            status_policy,
        })
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub const fn requests_per_second(&self) -> u32 {
        self.requests_per_second.get()
    }

    #[must_use]
    pub const fn max_requests(&self) -> u64 {
        self.max_requests.get()
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub const fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }
}

fn parse_target_url(raw: &str) -> Result<Url, ValidationError> {
    let trimmed = raw.trim();
    if !ALLOWED_SCHEME_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
    {
        return Err(ValidationError::UnsupportedScheme {
            url: raw.to_owned(),
        });
    }
    let url = Url::parse(trimmed).map_err(|err| ValidationError::InvalidUrl {
        url: raw.to_owned(),
        source: err,
    })?;
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::UrlMissingHost {
            url: raw.to_owned(),
        });
    }
    Ok(url)
}
