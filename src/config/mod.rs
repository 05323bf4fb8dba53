//! Checking service configuration.
//!
//! The service base URL is resolved once at startup into an [`ApiConfig`]
//! that is handed to the client explicitly. Resolution order:
//! 1. `--api-url` flag
//! 2. `REPO_CHECKER_API_URL` environment variable at runtime
//! 3. `REPO_CHECKER_API_URL` captured when the binary was built
//!
//! # Example
//!
//! ```
//! use repo_checker::config::ApiConfig;
//!
//! let config = ApiConfig::new("https://checker.example.com/api").unwrap();
//! assert_eq!(
//!     config.check_endpoint().as_str(),
//!     "https://checker.example.com/api/check"
//! );
//! ```

pub mod api;

pub use api::{ApiConfig, ApiUrlSource, API_URL_ENV, BUILD_API_URL, CHECK_PATH};
