//! Shelfkeeper Library Catalog
//!
//! An in-memory catalog and lending desk: books are loaded from a
//! comma-delimited list, indexed by ISBN and by title, reserved in arrival
//! order and lent and returned against a last-in, first-out ledger.

pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::CatalogService;
