use lazy_static::lazy_static;
use reqwest::{Client, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use std::time::Duration;
use thiserror::Error;

const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

lazy_static! {
    static ref REST_CLIENT: ClientWithMiddleware = {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Error creating http client");

        ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(
                ExponentialBackoff::builder()
                    .retry_bounds(Duration::from_millis(500), Duration::from_secs(8))
                    .build_with_max_retries(MAX_RETRIES),
            ))
            .build()
    };
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest_middleware::Error,
    },
    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },
    #[error("could not read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl TransportError {
    /// True when the request completed but the server answered non-2xx.
    /// Paginated feeds use this to tell "end of results" apart from a
    /// connection failure.
    pub fn is_status(&self) -> bool {
        matches!(self, TransportError::Status { .. })
    }
}

/// GETs a URL and returns the full response body as text. Non-success
/// statuses are errors; retries on transient failures are handled by the
/// shared client.
pub async fn fetch_text(url: &str) -> Result<String, TransportError> {
    let response = REST_CLIENT
        .get(url)
        .send()
        .await
        .map_err(|source| TransportError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(|source| TransportError::Body {
        url: url.to_string(),
        source,
    })
}
