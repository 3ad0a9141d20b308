//! Extraction of rate-limit fields from a completed response.
use reqwest::header::{AsHeaderName, CONTENT_LENGTH, HeaderMap, RETRY_AFTER};

use crate::domain::ResponseRecord;
use crate::http::ProbeResponse;

pub const X_RATELIMIT_LIMIT: &str = "x-ratelimit-limit";
pub const X_RATELIMIT_REMAINING: &str = "x-ratelimit-remaining";
pub const X_RATELIMIT_RESET: &str = "x-ratelimit-reset";

/// Normalizes a response into a [`ResponseRecord`].
///
/// Missing headers, and values that are not visible ASCII, become `None`.
#[must_use]
pub fn analyze(response: &ProbeResponse) -> ResponseRecord {
    let headers = response.headers();
    ResponseRecord {
        status_code: response.status(),
        x_ratelimit_limit: header_value(headers, X_RATELIMIT_LIMIT),
        x_ratelimit_remaining: header_value(headers, X_RATELIMIT_REMAINING),
        x_ratelimit_reset: header_value(headers, X_RATELIMIT_RESET),
        retry_after: header_value(headers, RETRY_AFTER),
        content_length: header_value(headers, CONTENT_LENGTH),
    }
}

fn header_value<K>(headers: &HeaderMap, name: K) -> Option<String>
where
    K: AsHeaderName,
{
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use reqwest::header::{HeaderName, HeaderValue};

    use super::*;

    fn response_with(status: u16, headers: &[(&'static str, &'static str)]) -> ProbeResponse {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
        ProbeResponse::new(status, map)
    }

    #[test]
    fn analyze_reads_retry_after() -> Result<(), String> {
        let record = analyze(&response_with(429, &[("retry-after", "30")]));
        if record.retry_after.as_deref() != Some("30") {
            return Err(format!("Unexpected retry_after {:?}", record.retry_after));
        }
        if record.status_code != 429 {
            return Err(format!("Unexpected status {}", record.status_code));
        }
        Ok(())
    }

    #[test]
    fn analyze_reads_all_rate_limit_headers() -> Result<(), String> {
        let record = analyze(&response_with(
            200,
            &[
                ("x-ratelimit-limit", "100"),
                ("x-ratelimit-remaining", "42"),
                ("x-ratelimit-reset", "1700000000"),
                ("content-length", "2"),
            ],
        ));
        let expected = ResponseRecord {
            status_code: 200,
            x_ratelimit_limit: Some("100".to_owned()),
            x_ratelimit_remaining: Some("42".to_owned()),
            x_ratelimit_reset: Some("1700000000".to_owned()),
            retry_after: None,
            content_length: Some("2".to_owned()),
        };
        if record != expected {
            return Err(format!("Unexpected record {:?}", record));
        }
        Ok(())
    }

    #[test]
    fn analyze_without_headers_yields_absent_fields() -> Result<(), String> {
        let record = analyze(&response_with(204, &[]));
        if record.header_fields().iter().any(|(_, value)| value.is_some()) {
            return Err(format!("Expected no header fields, got {:?}", record));
        }
        Ok(())
    }

    #[test]
    fn analyze_skips_non_ascii_values() -> Result<(), String> {
        let mut map = HeaderMap::new();
        let value = HeaderValue::from_bytes(b"caf\xe9").map_err(|err| err.to_string())?;
        map.insert(HeaderName::from_static("x-ratelimit-limit"), value);
        let record = analyze(&ProbeResponse::new(200, map));
        if record.x_ratelimit_limit.is_some() {
            return Err("Expected opaque header value to be dropped".to_owned());
        }
        Ok(())
    }
}
