//! # Jobs Types
//!
//! Domain types and port traits for the job salary service.
//! This crate has ZERO IO dependencies - only data structures,
//! lookup contracts, and the error taxonomy.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the hexagonal layout:
//! - `domain/` - Pure domain types (JobId, Job, Salary)
//! - `ports/` - Traits the repository and converter adapters implement
//! - `dto/` - Serialisable derived views handed to the CLI
//! - `error/` - Domain, repository and application error types
//!
//! Absence is always `Option::None`; only invalid input is an error.

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Company, Job, JobId, Role, Salary};
pub use dto::JobSummary;
pub use error::{AppError, DomainError, RepoError};
pub use exchange_rates::CurrencyCode;
pub use ports::{CurrencyConverter, ExchangeError, JobRepository};
