//! Shared error types for the business headline service

use thiserror::Error;

/// Rejection of a business submission before any headline is produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },
}

pub type ValidationResult<T> = Result<T, ValidationError>;
