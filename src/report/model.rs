//! Check result types returned by the checking service.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::error::Category;

use crate::error::{CheckerError, Result};

use super::ordered::Entries;

/// Key of the file count inside the summary object.
pub const TOTAL_FILES_KEY: &str = "totalFiles";

/// The full response payload of a successful check.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CheckResult {
    /// Aggregate counts per check.
    pub summary: Summary,
    /// Per-file results.
    pub details: Vec<FileResult>,
}

impl CheckResult {
    /// Decode a success response body.
    ///
    /// A body that is not JSON at all is a [`CheckerError::Transport`];
    /// JSON of the wrong shape is a [`CheckerError::MalformedResult`].
    pub fn decode(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| match e.classify() {
            Category::Data => CheckerError::MalformedResult {
                message: e.to_string(),
            },
            Category::Io | Category::Syntax | Category::Eof => CheckerError::Transport {
                message: format!("Invalid JSON in response: {}", e),
            },
        })
    }

    /// Number of files whose overall result passed.
    pub fn passed_files(&self) -> usize {
        self.details.iter().filter(|f| f.passed).count()
    }

    /// Number of files whose overall result failed.
    pub fn failed_files(&self) -> usize {
        self.details.iter().filter(|f| !f.passed).count()
    }
}

/// Summary block: the declared file count plus one entry per check.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    /// File count as declared by the service.
    pub total_files: u64,
    /// Per-check counts, in service order, without `totalFiles`.
    pub checks: Entries<SummaryEntry>,
    /// How many check entries preceded `totalFiles` in the service's object.
    total_files_position: usize,
}

/// Pass/fail counts for one check across all files.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SummaryEntry {
    pub label: String,
    pub passed: u64,
    pub failed: u64,
}

/// Result of checking one file.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResult {
    pub file_name: String,
    pub passed: bool,
    pub checks: Entries<CheckDetail>,
}

/// Outcome of one check on one file.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CheckDetail {
    pub label: String,
    pub status: CheckStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

/// Status of a check. Anything other than `"pass"` is a failure.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(from = "String", into = "String")]
pub enum CheckStatus {
    Pass,
    /// Failure, keeping the status word the service sent.
    Fail(String),
}

impl CheckStatus {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// The raw status word.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pass => "pass",
            Self::Fail(raw) => raw,
        }
    }

    /// Status word with its first letter uppercased (`"pass"` → `"Pass"`).
    pub fn capitalized(&self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<String> for CheckStatus {
    fn from(raw: String) -> Self {
        if raw == "pass" {
            Self::Pass
        } else {
            Self::Fail(raw)
        }
    }
}

impl From<CheckStatus> for String {
    fn from(status: CheckStatus) -> Self {
        match status {
            CheckStatus::Pass => "pass".to_string(),
            CheckStatus::Fail(raw) => raw,
        }
    }
}

impl<'de> Deserialize<'de> for Summary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct SummaryVisitor;

        impl<'de> Visitor<'de> for SummaryVisitor {
            type Value = Summary;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a summary object with `totalFiles`")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut total_files = None;
                let mut total_files_position = 0;
                let mut checks = Vec::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == TOTAL_FILES_KEY {
                        if total_files.is_some() {
                            return Err(de::Error::duplicate_field(TOTAL_FILES_KEY));
                        }
                        total_files = Some(map.next_value::<u64>()?);
                        total_files_position = checks.len();
                    } else {
                        let entry = map.next_value::<SummaryEntry>()?;
                        checks.push((key, entry));
                    }
                }

                let total_files =
                    total_files.ok_or_else(|| de::Error::missing_field(TOTAL_FILES_KEY))?;

                Ok(Summary {
                    total_files,
                    checks: Entries::new(checks),
                    total_files_position,
                })
            }
        }

        deserializer.deserialize_map(SummaryVisitor)
    }
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.checks.len() + 1))?;
        for (i, (key, entry)) in self.checks.iter().enumerate() {
            if i == self.total_files_position {
                map.serialize_entry(TOTAL_FILES_KEY, &self.total_files)?;
            }
            map.serialize_entry(key, entry)?;
        }
        if self.total_files_position >= self.checks.len() {
            map.serialize_entry(TOTAL_FILES_KEY, &self.total_files)?;
        }
        map.end()
    }
}
