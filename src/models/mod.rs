//! Data models for Shelfkeeper

pub mod book;
pub mod import_report;
pub mod outcome;

// Re-export commonly used types
pub use book::{Book, RawRecord};
pub use import_report::{ImportReport, RejectedRow};
pub use outcome::{LendOutcome, ReturnOutcome, SearchOutcome};
