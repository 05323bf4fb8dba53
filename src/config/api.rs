//! Base URL resolution for the checking service.

use std::fmt;

use reqwest::Url;

use crate::error::{CheckerError, Result};

/// Environment variable holding the service base URL.
pub const API_URL_ENV: &str = "REPO_CHECKER_API_URL";

/// Base URL baked in at build time, if the variable was set then.
pub const BUILD_API_URL: Option<&str> = option_env!("REPO_CHECKER_API_URL");

/// Path of the check endpoint, relative to the base URL.
pub const CHECK_PATH: &str = "check";

/// Where the base URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiUrlSource {
    /// `--api-url` on the command line.
    Flag,
    /// Environment variable at runtime.
    Environment,
    /// Environment variable at build time.
    Build,
}

impl fmt::Display for ApiUrlSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "--api-url"),
            Self::Environment => write!(f, "{}", API_URL_ENV),
            Self::Build => write!(f, "build-time {}", API_URL_ENV),
        }
    }
}

/// Resolved checking service configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Parse a base URL.
    ///
    /// The URL must be absolute http or https. A trailing slash is added
    /// when missing so the check path joins under the base, not beside it.
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(CheckerError::Config {
                message: "API URL is empty".to_string(),
            });
        }

        let mut url = Url::parse(trimmed).map_err(|e| CheckerError::Config {
            message: format!("API URL '{}' is not valid: {}", trimmed, e),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CheckerError::Config {
                message: format!(
                    "API URL '{}' must use http or https, not '{}'",
                    trimmed,
                    url.scheme()
                ),
            });
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self { base_url: url })
    }

    /// Resolve from the flag value, then the runtime environment, then the
    /// value captured at build time.
    pub fn resolve(flag: Option<&str>) -> Result<Self> {
        let runtime = std::env::var(API_URL_ENV).ok();
        Self::resolve_from(flag, runtime.as_deref(), BUILD_API_URL)
    }

    /// Resolve from explicit candidates (for testing).
    pub fn resolve_from(
        flag: Option<&str>,
        runtime: Option<&str>,
        build: Option<&str>,
    ) -> Result<Self> {
        let candidates = [
            (flag, ApiUrlSource::Flag),
            (runtime, ApiUrlSource::Environment),
            (build, ApiUrlSource::Build),
        ];

        let (value, source) = candidates
            .into_iter()
            .find_map(|(value, source)| {
                value
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| (v, source))
            })
            .ok_or_else(|| CheckerError::Config {
                message: format!(
                    "No checking service URL configured. Pass --api-url or set {}",
                    API_URL_ENV
                ),
            })?;

        tracing::debug!("Using API URL from {}: {}", source, value);
        Self::new(value)
    }

    /// The normalized base URL (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL of the check endpoint.
    pub fn check_endpoint(&self) -> Url {
        // Joining a bare relative segment onto a slash-terminated base cannot fail.
        self.base_url
            .join(CHECK_PATH)
            .unwrap_or_else(|_| self.base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_check_onto_base_without_slash() {
        let config = ApiConfig::new("https://api.example.com/v1").unwrap();
        assert_eq!(
            config.check_endpoint().as_str(),
            "https://api.example.com/v1/check"
        );
    }

    #[test]
    fn joins_check_onto_base_with_slash() {
        let config = ApiConfig::new("https://api.example.com/v1/").unwrap();
        assert_eq!(
            config.check_endpoint().as_str(),
            "https://api.example.com/v1/check"
        );
    }

    #[test]
    fn joins_check_onto_host_only() {
        let config = ApiConfig::new("http://localhost:3000").unwrap();
        assert_eq!(
            config.check_endpoint().as_str(),
            "http://localhost:3000/check"
        );
    }

    #[test]
    fn rejects_empty_url() {
        let err = ApiConfig::new("   ").unwrap_err();
        assert!(matches!(err, CheckerError::Config { .. }));
    }

    #[test]
    fn rejects_relative_url() {
        let err = ApiConfig::new("/api").unwrap_err();
        assert!(matches!(err, CheckerError::Config { .. }));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = ApiConfig::new("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn flag_takes_precedence() {
        let config = ApiConfig::resolve_from(
            Some("https://flag.example.com"),
            Some("https://env.example.com"),
            Some("https://build.example.com"),
        )
        .unwrap();
        assert_eq!(config.base_url().host_str(), Some("flag.example.com"));
    }

    #[test]
    fn runtime_env_beats_build_value() {
        let config = ApiConfig::resolve_from(
            None,
            Some("https://env.example.com"),
            Some("https://build.example.com"),
        )
        .unwrap();
        assert_eq!(config.base_url().host_str(), Some("env.example.com"));
    }

    #[test]
    fn falls_back_to_build_value() {
        let config =
            ApiConfig::resolve_from(None, Some(""), Some("https://build.example.com")).unwrap();
        assert_eq!(config.base_url().host_str(), Some("build.example.com"));
    }

    #[test]
    fn missing_everywhere_is_config_error() {
        let err = ApiConfig::resolve_from(None, None, None).unwrap_err();
        assert!(err.to_string().contains(API_URL_ENV));
    }

    #[test]
    fn source_display() {
        assert_eq!(ApiUrlSource::Flag.to_string(), "--api-url");
        assert_eq!(ApiUrlSource::Environment.to_string(), API_URL_ENV);
    }
}
