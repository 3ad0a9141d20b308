use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFailureKind {
    Timeout,
    Connect,
    Transport,
    /// The exchange completed but the status was rejected by the status policy.
    Status,
}

impl RequestFailureKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RequestFailureKind::Timeout => "timeout",
            RequestFailureKind::Connect => "connect",
            RequestFailureKind::Transport => "transport",
            RequestFailureKind::Status => "status",
        }
    }
}

/// A single attempt that produced no analyzable response.
#[derive(Debug, Clone, Error)]
#[error("{} failure: {message}", .kind.as_str())]
pub struct RequestFailure {
    pub kind: RequestFailureKind,
    pub message: String,
}

impl RequestFailure {
    #[must_use]
    pub const fn new(kind: RequestFailureKind, message: String) -> Self {
        Self { kind, message }
    }

    #[must_use]
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            RequestFailureKind::Timeout
        } else if err.is_connect() {
            RequestFailureKind::Connect
        } else {
            RequestFailureKind::Transport
        };
        Self::new(kind, err.to_string())
    }
}
