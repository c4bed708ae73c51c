//! Import report for a batch of delimited rows.

use serde::Serialize;

/// A row the loader could not turn into a book.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RejectedRow {
    pub line_number: usize,
    pub line: String,
    pub reason: String,
}

/// What happened while loading one source.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    pub source: String,
    /// Books written to the catalog, including upserts over an existing ISBN.
    pub added: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedRow>,
    /// Set when the source itself could not be read; nothing was loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl ImportReport {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.failure.is_none()
    }
}
