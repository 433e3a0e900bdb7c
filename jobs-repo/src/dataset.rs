//! Immutable job dataset and the reference listings.

use std::collections::HashMap;

use jobs_types::{Job, JobId, RepoError};

/// Listings shipped with the service, in insertion order.
const REFERENCE_JOBS: [(&str, &str, &str, f64); 6] = [
    ("1", "Google", "Software Engineer", 110_000.0),
    ("2", "Microsoft", "Senior Software Engineer", 120_000.0),
    ("3", "Amazon", "Data Engineer", 105_000.0),
    ("4", "Meta", "Frontend Engineer", 95_000.0),
    ("5", "Apple", "iOS Developer", 115_000.0),
    ("6", "Netflix", "Staff Engineer", 130_000.0),
];

/// Read-only mapping from [`JobId`] to [`Job`].
///
/// Keys are unique and each key equals the id of the job stored under it.
/// Iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    jobs: Vec<Job>,
    index: HashMap<JobId, usize>,
}

impl Dataset {
    /// Builds a dataset from explicit `(key, job)` entries.
    ///
    /// # Errors
    /// - [`RepoError::KeyMismatch`] if a key differs from its job's id
    /// - [`RepoError::DuplicateId`] if a key appears twice
    pub fn from_entries<I>(entries: I) -> Result<Self, RepoError>
    where
        I: IntoIterator<Item = (JobId, Job)>,
    {
        let mut dataset = Self::default();
        for (key, job) in entries {
            if key != job.id {
                return Err(RepoError::KeyMismatch { key, id: job.id });
            }
            if dataset.index.contains_key(&key) {
                return Err(RepoError::DuplicateId(key));
            }
            dataset.index.insert(key, dataset.jobs.len());
            dataset.jobs.push(job);
        }
        Ok(dataset)
    }

    /// Builds a dataset keyed by each job's own id.
    pub fn from_jobs<I>(jobs: I) -> Result<Self, RepoError>
    where
        I: IntoIterator<Item = Job>,
    {
        Self::from_entries(jobs.into_iter().map(|job| (job.id.clone(), job)))
    }

    /// The six reference listings.
    pub fn reference() -> Result<Self, RepoError> {
        Self::from_jobs(
            REFERENCE_JOBS
                .iter()
                .map(|&(id, company, role, salary)| Job::new(id, company, role, salary)),
        )
    }

    pub fn get(&self, id: &JobId) -> Option<&Job> {
        self.index.get(id).and_then(|&i| self.jobs.get(i))
    }

    pub fn contains(&self, id: &JobId) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
