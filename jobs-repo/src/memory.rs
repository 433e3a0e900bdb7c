//! In-memory repository adapter.

use std::sync::Arc;

use jobs_types::{Job, JobId, JobRepository};

use crate::dataset::Dataset;

// ─────────────────────────────────────────────────────────────────────────────
// In-Memory Repository
// ─────────────────────────────────────────────────────────────────────────────

/// Repository over an immutable [`Dataset`].
///
/// Cloning shares the dataset. Nothing is mutated after construction, so
/// lookups need no locking.
#[derive(Debug, Clone)]
pub struct InMemoryJobRepo {
    dataset: Arc<Dataset>,
}

impl InMemoryJobRepo {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    /// Returns a reference to the underlying dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }
}

impl JobRepository for InMemoryJobRepo {
    fn find_by_id(&self, id: &JobId) -> Option<Job> {
        let job = self.dataset.get(id).cloned();
        if job.is_none() {
            tracing::trace!(%id, "job not in dataset");
        }
        job
    }

    fn find_all(&self) -> Vec<Job> {
        self.dataset.iter().cloned().collect()
    }
}
