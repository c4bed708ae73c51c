//! Business logic services
//!
//! [`CatalogService`] is split across two files: `catalog` holds loading and
//! lookups, `loans` holds the reservation and lending workflow.

pub mod catalog;
pub mod loans;

pub use catalog::CatalogService;
