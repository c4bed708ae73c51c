//! Input loading
//!
//! A [`RecordSource`] turns some input into split rows; validation into books
//! happens later, in the catalog service, so a bad row never stops a batch.

pub mod delimited;

pub use delimited::{DelimitedFile, DelimitedReader};

use crate::{error::AppResult, models::RawRecord};

/// One non-blank input line and the fields split from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    /// 1-based, counting blank lines
    pub line_number: usize,
    pub line: String,
    pub record: RawRecord,
}

#[cfg_attr(test, mockall::automock)]
pub trait RecordSource {
    /// Label used in logs and import reports
    fn name(&self) -> String;

    /// Read every row. Fails only when the input as a whole cannot be read.
    fn rows(&mut self) -> AppResult<Vec<SourceRow>>;
}
