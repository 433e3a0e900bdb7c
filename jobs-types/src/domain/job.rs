//! Job listing domain model.

use serde::{Deserialize, Serialize};

use super::salary::Salary;
use crate::error::DomainError;

/// Opaque identifier for a Job. Equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Creates a JobId from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for JobId {
    type Err = DomainError;

    /// Parses user input; surrounding whitespace is dropped and blank input is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::ValidationError(
                "Job id cannot be empty".into(),
            ));
        }
        Ok(Self::new(trimmed))
    }
}

/// Name of the hiring organisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Company(String);

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Company {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Title of the advertised position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable job listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique identifier, equal to the key the job is stored under
    pub id: JobId,
    /// Hiring organisation
    pub company: Company,
    /// Position title
    pub role: Role,
    /// Annual salary
    pub salary: Salary,
}

impl Job {
    /// Creates a job listing. No field is validated.
    pub fn new(
        id: impl Into<JobId>,
        company: impl Into<String>,
        role: impl Into<String>,
        salary: impl Into<Salary>,
    ) -> Self {
        Self {
            id: id.into(),
            company: Company::new(company),
            role: Role::new(role),
            salary: salary.into(),
        }
    }

    /// Case-sensitive comparison against the company name.
    pub fn is_from(&self, company: &str) -> bool {
        self.company.as_str() == company
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} at {} ({})",
            self.id, self.role, self.company, self.salary
        )
    }
}
