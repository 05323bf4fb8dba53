//! Checking service client.
//!
//! The view talks to the service through the [`CheckClient`] trait so it
//! can be driven by a stub in tests. [`HttpCheckClient`] is the real
//! implementation.

pub mod http;

pub use http::{failure_message, HttpCheckClient};

use serde::Serialize;

use crate::error::Result;
use crate::report::CheckResult;

/// Body of a check request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    /// Repository URL, sent verbatim.
    pub repo_url: String,
}

impl CheckRequest {
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
        }
    }
}

/// Trait for issuing a check against the service.
pub trait CheckClient {
    /// Send one check request and decode the result.
    ///
    /// Fails with `Request`, `Transport` or `MalformedResult`.
    fn check(&self, request: &CheckRequest) -> Result<CheckResult>;
}
