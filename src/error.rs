//! Error types for Shelfkeeper

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing {0} in the CSV row")]
    MissingField(&'static str),

    #[error("Error converting {field} '{value}': {reason}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Negative {field} '{value}'")]
    NegativeValue { field: &'static str, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// True for errors that reject a single input row without stopping the batch
    pub fn is_malformed_row(&self) -> bool {
        matches!(
            self,
            AppError::MissingField(_) | AppError::InvalidNumber { .. } | AppError::NegativeValue { .. }
        )
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
