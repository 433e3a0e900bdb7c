//! Domain models for the job salary service.

pub mod job;
pub mod salary;

pub use job::{Company, Job, JobId, Role};
pub use salary::Salary;
