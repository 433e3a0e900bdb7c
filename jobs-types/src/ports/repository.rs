//! Repository port trait.
//!
//! This is the primary port in the hexagonal layout.
//! Adapters (the fixed in-memory table, test fakes) implement this trait.

use crate::domain::{Job, JobId};
use crate::error::RepoError;

/// Read-only lookup port over the job dataset.
///
/// A missing key is reported as `None`, never as an error.
pub trait JobRepository: Send + Sync + 'static {
    /// Gets a job by ID.
    fn find_by_id(&self, id: &JobId) -> Option<Job>;

    /// Lists all jobs in a deterministic order.
    fn find_all(&self) -> Vec<Job>;

    /// Gets a job by ID, turning absence into [`RepoError::NotFound`].
    fn get_job(&self, id: &JobId) -> Result<Job, RepoError> {
        self.find_by_id(id)
            .ok_or_else(|| RepoError::NotFound(id.clone()))
    }
}
