//! HTTP client shared by every remote service in the pipeline.
//!
//! Provides a wrapper around reqwest with:
//! - A default request timeout so one hung provider cannot stall the job
//! - A fixed user agent
//! - Uniform mapping of transport failures and non-2xx statuses to
//!   [`TrendError`]

use crate::config::NetworkConfig;
use crate::{Result, TrendError};
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Maximum number of body bytes echoed into an HTTP status error.
const ERROR_BODY_LIMIT: usize = 512;

/// HTTP client used by the trend source, translators and notifier.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_timeout(NetworkConfig::REQUEST_TIMEOUT)
    }

    /// Create a new HTTP client with a custom default timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(NetworkConfig::USER_AGENT)
            .build()
            .map_err(|e| TrendError::Network {
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(e),
            })?;

        Ok(Self { client })
    }

    /// Get a reference to the underlying reqwest client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Make a GET request.
    ///
    /// Only transport failures are errors; the status is left to the caller.
    pub async fn get(&self, url: &str) -> Result<Response> {
        debug!("GET {}", redact_query(url));
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| request_failed("GET", url, e))
    }

    /// Make a POST request with a JSON body.
    pub async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<Response> {
        debug!("POST {} (json)", redact_query(url));
        self.client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| request_failed("POST", url, e))
    }

    /// Make a POST request with a form-encoded body.
    pub async fn post_form<T: Serialize + ?Sized>(&self, url: &str, form: &T) -> Result<Response> {
        debug!("POST {} (form)", redact_query(url));
        self.client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| request_failed("POST", url, e))
    }

    /// Turn a non-2xx response into [`TrendError::HttpStatus`].
    pub async fn ensure_success(response: Response, service: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let mut body = response.text().await.unwrap_or_default();
        if body.len() > ERROR_BODY_LIMIT {
            let mut cut = ERROR_BODY_LIMIT;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }

        Err(TrendError::HttpStatus {
            service: service.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}

/// Map a transport failure, keeping query strings (API keys) out of the error.
fn request_failed(method: &str, url: &str, e: reqwest::Error) -> TrendError {
    let e = e.without_url();
    TrendError::Network {
        message: format!("{} {} failed: {}", method, redact_query(url), e),
        source: Some(e),
    }
}

/// Strip the query string from a URL before it reaches the logs.
///
/// Some providers take their API key as a query parameter.
pub fn redact_query(url: &str) -> &str {
    url.split_once('?').map(|(base, _)| base).unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve;
    use axum::{http::StatusCode, routing::get, Router};

    #[test]
    fn test_redact_query() {
        assert_eq!(
            redact_query("https://translation.googleapis.com/v2?key=secret"),
            "https://translation.googleapis.com/v2"
        );
        assert_eq!(redact_query("https://api.deepl.com/v2"), "https://api.deepl.com/v2");
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::new().unwrap();
        let _ = client.inner();
    }

    #[tokio::test]
    async fn test_ensure_success_maps_status() {
        let app = Router::new()
            .route("/ok", get(|| async { "fine" }))
            .route(
                "/denied",
                get(|| async { (StatusCode::FORBIDDEN, "quota exceeded") }),
            );
        let base = serve(app).await;
        let client = HttpClient::new().unwrap();

        let ok = client.get(&format!("{}/ok", base)).await.unwrap();
        assert!(HttpClient::ensure_success(ok, "test").await.is_ok());

        let denied = client.get(&format!("{}/denied", base)).await.unwrap();
        match HttpClient::ensure_success(denied, "test").await {
            Err(TrendError::HttpStatus {
                service,
                status,
                body,
            }) => {
                assert_eq!(service, "test");
                assert_eq!(status, 403);
                assert_eq!(body, "quota exceeded");
            }
            other => panic!("expected HttpStatus error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpClient::new().unwrap();
        let err = client.get(&format!("http://{}/", addr)).await.unwrap_err();
        assert!(matches!(err, TrendError::Network { .. }));
    }
}
