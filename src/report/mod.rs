//! Check report model.
//!
//! - [`model`] - [`CheckResult`] and its parts, decoded from the service response
//! - [`ordered`] - [`Entries`], a JSON object that keeps its key order

pub mod model;
pub mod ordered;

pub use model::{
    CheckDetail, CheckResult, CheckStatus, FileResult, Summary, SummaryEntry, TOTAL_FILES_KEY,
};
pub use ordered::Entries;
