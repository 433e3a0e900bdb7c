//! Job Derivation Service
//!
//! Composes repository lookups and currency conversion into derived values.
//! Contains NO infrastructure logic - pure orchestration over the ports.
//!
//! Every operation short-circuits: the first absent lookup or failed
//! conversion ends the computation without evaluating later steps.

use jobs_types::{
    AppError, CurrencyConverter, ExchangeError, Job, JobId, JobRepository, JobSummary,
};

/// Application service for salary derivations.
///
/// Generic over `R: JobRepository` and `C: CurrencyConverter` - adapters are
/// injected at compile time, so tests can swap in fakes for either port.
pub struct JobDerivationService<R: JobRepository, C: CurrencyConverter> {
    repo: R,
    converter: C,
}

impl<R: JobRepository, C: CurrencyConverter> JobDerivationService<R, C> {
    /// Creates a new derivation service from its two ports.
    pub fn new(repo: R, converter: C) -> Self {
        Self { repo, converter }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Returns a reference to the underlying converter.
    pub fn converter(&self) -> &C {
        &self.converter
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Lookups
    // ─────────────────────────────────────────────────────────────────────────────

    /// Gets a job by ID, reporting absence as [`AppError::NotFound`].
    pub fn job(&self, id: &JobId) -> Result<Job, AppError> {
        self.repo.get_job(id).map_err(Into::into)
    }

    /// Lists all jobs.
    pub fn jobs(&self) -> Vec<Job> {
        self.repo.find_all()
    }

    /// Highest salary in the dataset, `None` when the dataset is empty.
    pub fn max_salary(&self) -> Option<f64> {
        self.repo
            .find_all()
            .iter()
            .map(|job| job.salary.amount())
            .reduce(f64::max)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Derivations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Salary of the job, or `0.0` when it does not exist.
    #[tracing::instrument(level = "debug", skip_all, fields(job_id = %id))]
    pub fn salary_of(&self, id: &JobId) -> f64 {
        self.repo
            .find_by_id(id)
            .map_or(0.0, |job| job.salary.amount())
    }

    /// Salary converted to the converter's target currency.
    ///
    /// Yields `0.0` when the job does not exist. A conversion failure (e.g.
    /// a negative salary) is returned to the caller.
    #[tracing::instrument(level = "debug", skip_all, fields(job_id = %id))]
    pub fn salary_in_other_currency(&self, id: &JobId) -> Result<f64, ExchangeError> {
        self.repo
            .find_by_id(id)
            .map_or(Ok(0.0), |job| self.converter.convert(Some(job.salary.amount())))
            .inspect_err(|e| tracing::warn!(error = %e, "Salary conversion failed"))
    }

    /// True iff the job exists and its company name equals `name` exactly.
    #[tracing::instrument(level = "debug", skip_all, fields(job_id = %id, company = name))]
    pub fn is_from_organization(&self, id: &JobId, name: &str) -> bool {
        self.repo.find_by_id(id).is_some_and(|job| job.is_from(name))
    }

    /// Sum of both salaries, `None` unless both jobs exist.
    #[tracing::instrument(level = "debug", skip_all, fields(first = %first, second = %second))]
    pub fn sum_of_two_salaries(&self, first: &JobId, second: &JobId) -> Option<f64> {
        let a = self.repo.find_by_id(first)?;
        let b = self.repo.find_by_id(second)?;
        Some(a.salary.amount() + b.salary.amount())
    }

    /// Max salary across all jobs minus the salary of `id`.
    ///
    /// `None` when the job does not exist or the dataset is empty.
    #[tracing::instrument(level = "debug", skip_all, fields(job_id = %id))]
    pub fn salary_gap_vs_max(&self, id: &JobId) -> Option<f64> {
        let salary = self.repo.find_by_id(id)?.salary.amount();
        self.max_salary().map(|max| max - salary)
    }

    /// Every derived value for one job, `Ok(None)` when it does not exist.
    #[tracing::instrument(level = "debug", skip_all, fields(job_id = %id))]
    pub fn summary(&self, id: &JobId) -> Result<Option<JobSummary>, ExchangeError> {
        self.repo
            .find_by_id(id)
            .map(|job| {
                let converted = self.converter.convert(Some(job.salary.amount()))?;
                let max = self.max_salary().unwrap_or(job.salary.amount());
                Ok(JobSummary::from_job(
                    &job,
                    converted,
                    self.converter.target_currency(),
                    max,
                ))
            })
            .transpose()
    }
}
