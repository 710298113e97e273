//! Core error types for PayMaster.
//!
//! Store implementations convert their own failures (I/O, database, remote
//! API) into [`Error::Repository`] so this type stays storage-agnostic.

use thiserror::Error;

use crate::payroll::PayrollError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the payroll domain.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Payroll calculation failed: {0}")]
    Payroll(#[from] PayrollError),

    #[error("Unsupported payroll configuration schema version: {0}")]
    UnsupportedSchemaVersion(u64),

    #[error("Salary structure not found for employee {employee_id} in company {company_id}")]
    SalaryStructureNotFound {
        employee_id: String,
        company_id: String,
    },

    #[error("Employee {0} not found")]
    EmployeeNotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for documents and user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::Json(err))
    }
}
