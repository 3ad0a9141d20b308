use reqwest::header::HeaderMap;

/// Status line and headers of one completed exchange.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    status: u16,
    headers: HeaderMap,
}

impl ProbeResponse {
    #[must_use]
    pub const fn new(status: u16, headers: HeaderMap) -> Self {
        Self { status, headers }
    }

    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}
