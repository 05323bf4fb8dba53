//! HTTP implementation of the checking service client.
//!
//! Sends `POST <base-url>/check` with a JSON body and maps the response
//! onto a [`CheckResult`] or one of the submission errors.

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::error::{CheckerError, Result, FALLBACK_ERROR_MESSAGE};
use crate::report::CheckResult;

use super::{CheckClient, CheckRequest};

/// Talks to the checking service over HTTP/HTTPS.
pub struct HttpCheckClient {
    client: Client,
    config: ApiConfig,
}

/// Error body returned with a non-success status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl HttpCheckClient {
    /// Create a client for the configured service.
    ///
    /// No request timeout is set; a request resolves or fails as the
    /// transport decides.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("repo-checker/", env!("CARGO_PKG_VERSION")))
            .timeout(None)
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the service configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl CheckClient for HttpCheckClient {
    fn check(&self, request: &CheckRequest) -> Result<CheckResult> {
        let endpoint = self.config.check_endpoint();
        tracing::debug!("POST {} for {}", endpoint, request.repo_url);

        let response = self
            .client
            .post(endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        tracing::debug!("{} answered {} ({} bytes)", endpoint, status, body.len());

        if !status.is_success() {
            return Err(CheckerError::Request {
                status: status.as_u16(),
                message: failure_message(&body),
            });
        }

        CheckResult::decode(&body)
    }
}

/// Extract the user-facing message from a failure response body.
///
/// Uses the body's `message` field when it is a non-empty string, and
/// [`FALLBACK_ERROR_MESSAGE`] otherwise (including when the body is not JSON).
pub fn failure_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}
