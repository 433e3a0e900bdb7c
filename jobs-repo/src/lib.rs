//! # Jobs Repository
//!
//! Concrete repository implementation (adapter) for the job salary service.
//! This crate provides the in-memory adapter that implements the `JobRepository` port
//! over a dataset built once at startup.

use jobs_types::RepoError;

pub mod dataset;
pub mod memory;


pub use dataset::Dataset;
pub use memory::InMemoryJobRepo;

/// Build a repository over the reference listings.
///
/// This function:
/// 1. Builds the reference dataset, validating key/id consistency
/// 2. Wraps it in a ready-to-use `InMemoryJobRepo`
///
/// # Examples
///
/// ```
/// use jobs_types::{JobId, JobRepository};
///
/// let repo = jobs_repo::build_repo().unwrap();
/// assert_eq!(repo.find_all().len(), 6);
/// assert!(repo.find_by_id(&JobId::from("42")).is_none());
/// ```
pub fn build_repo() -> Result<InMemoryJobRepo, RepoError> {
    let dataset = Dataset::reference()?;
    tracing::debug!(jobs = dataset.len(), "Reference dataset loaded");
    Ok(InMemoryJobRepo::new(dataset))
}
