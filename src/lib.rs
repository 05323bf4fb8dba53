//! repo-checker - Check a repository against a remote code checking service.
//!
//! The crate submits a repository URL to the checking service, shows a
//! loading skeleton while the request is in flight, and renders either
//! the per-file report or an error alert.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`client`] - The checking service client
//! - [`config`] - Service base URL resolution
//! - [`error`] - Error types and result aliases
//! - [`report`] - The check result model
//! - [`ui`] - Prompts, spinners, and terminal output
//! - [`view`] - The checker view state machine and its rendering
//!
//! # Example
//!
//! ```
//! use repo_checker::report::CheckResult;
//!
//! let result = CheckResult::decode(
//!     r#"{"summary": {"totalFiles": 2}, "details": [
//!         {"fileName": "index.html", "passed": true, "checks": {}},
//!         {"fileName": "about.html", "passed": false, "checks": {}}
//!     ]}"#,
//! )
//! .unwrap();
//! assert_eq!(result.passed_files(), 1);
//! assert_eq!(result.failed_files(), 1);
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod ui;
pub mod view;

pub use error::{CheckerError, Result};
