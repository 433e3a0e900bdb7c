//! Error types for the job salary service.
//!
//! Absence of a record is NOT an error and never appears here; lookups
//! return `Option`. These types cover invalid input and broken invariants.

use crate::domain::JobId;
use crate::ports::ExchangeError;

/// Domain-level errors (invalid values supplied by callers).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Repository-level errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    #[error("Job not found: {0}")]
    NotFound(JobId),

    #[error("Duplicate job id in dataset: {0}")]
    DuplicateId(JobId),

    #[error("Dataset key {key} does not match job id {id}")]
    KeyMismatch { key: JobId, id: JobId },
}

/// Application-level errors (for the CLI and other callers that need a
/// single error type).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => AppError::NotFound(format!("Job {}", id)),
            e @ (RepoError::DuplicateId(_) | RepoError::KeyMismatch { .. }) => {
                AppError::Internal(e.to_string())
            }
        }
    }
}

impl From<ExchangeError> for AppError {
    fn from(err: ExchangeError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError(msg) => AppError::InvalidInput(msg),
        }
    }
}
