use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, error};

use crate::domain::{ProbeConfig, StatusPolicy};
use crate::error::{HttpError, RequestFailure, RequestFailureKind};

use super::ProbeResponse;

/// Something the pacing loop can fire a single request at.
#[async_trait]
pub trait ProbeTarget {
    /// Sends one request and waits for it to complete or fail.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestFailure`] when no analyzable response was received.
    async fn send(&self) -> Result<ProbeResponse, RequestFailure>;
}

/// Keep-alive GET client bound to a single target URL.
#[derive(Debug, Clone)]
pub struct HttpProbeClient {
    client: Client,
    url: Url,
    status_policy: StatusPolicy,
}

impl HttpProbeClient {
    /// Builds the pooled client with the configured timeout and User-Agent.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: &ProbeConfig) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(|source| HttpError::BuildClientFailed { source })?;

        Ok(Self {
            client,
            url: config.url().clone(),
            status_policy: config.status_policy(),
        })
    }
}

#[async_trait]
impl ProbeTarget for HttpProbeClient {
    async fn send(&self) -> Result<ProbeResponse, RequestFailure> {
        let response = match self.client.get(self.url.clone()).send().await {
            Ok(response) => response,
            Err(err) => {
                error!("Request failed: {}", err);
                return Err(RequestFailure::from_reqwest(&err));
            }
        };

        let status = response.status();
        if matches!(self.status_policy, StatusPolicy::FailNonSuccess) && !status.is_success() {
            let failure = RequestFailure::new(
                RequestFailureKind::Status,
                format!("HTTP {} for url ({})", status, self.url),
            );
            error!("Request failed: {}", failure.message);
            return Err(failure);
        }

        let headers = response.headers().clone();
        match drain_response_body(response).await {
            Ok(bytes) => debug!("Received {} with {} body bytes", status, bytes),
            Err(err) => {
                error!("Failed to read response body: {}", err);
                return Err(RequestFailure::from_reqwest(&err));
            }
        }

        Ok(ProbeResponse::new(status.as_u16(), headers))
    }
}

async fn drain_response_body(mut response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = response.chunk().await? {
        total_bytes = total_bytes.saturating_add(u64::try_from(chunk.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
