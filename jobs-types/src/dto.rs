//! Data Transfer Objects (DTOs) for derived views.

use serde::{Deserialize, Serialize};

use crate::CurrencyCode;
use crate::domain::{Job, JobId};

/// Every derived value for one job, as printed by `jobs summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: JobId,
    pub company: String,
    pub role: String,
    /// Salary in the dataset currency
    pub salary: f64,
    /// Salary after conversion
    pub converted_salary: f64,
    /// Currency of `converted_salary`
    pub currency: CurrencyCode,
    /// Distance to the best-paid job in the dataset
    pub gap_vs_max: f64,
}

impl JobSummary {
    pub fn from_job(job: &Job, converted_salary: f64, currency: CurrencyCode, max: f64) -> Self {
        Self {
            id: job.id.clone(),
            company: job.company.to_string(),
            role: job.role.to_string(),
            salary: job.salary.amount(),
            converted_salary,
            currency,
            gap_vs_max: max - job.salary.amount(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_job() {
        let job = Job::new("4", "Meta", "Frontend Engineer", 95000.0);
        let summary = JobSummary::from_job(&job, 86450.0, CurrencyCode::EUR, 130000.0);
        assert_eq!(summary.gap_vs_max, 35000.0);
        assert_eq!(summary.company, "Meta");

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["currency"], "EUR");
        assert_eq!(json["id"], "4");
    }
}
