//! The checker view.
//!
//! - [`state`] - [`CheckerView`] and its [`ViewState`] lifecycle
//! - [`render`] - pure rendering of a state into lines
//!
//! # Example
//!
//! ```
//! use repo_checker::ui::CheckerTheme;
//! use repo_checker::view::CheckerView;
//!
//! let mut view = CheckerView::new();
//! view.begin("https://github.com/user/repo").unwrap();
//! assert!(!view.controls_enabled());
//!
//! view.settle(Err(repo_checker::CheckerError::Transport {
//!     message: "connection refused".into(),
//! }));
//! assert!(view.controls_enabled());
//! assert_eq!(view.state().error(), Some("connection refused"));
//!
//! let lines = view.render(&CheckerTheme::plain());
//! assert_eq!(lines[1], "│ connection refused");
//! ```

pub mod render;
pub mod state;

pub use render::{render, render_summary, LOADING_TITLE};
pub use state::{CheckerView, ViewState};
