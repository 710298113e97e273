//! Employee directory contract.

use super::employees_model::Employee;
use crate::errors::Result;

/// Read access to employee profiles.
///
/// The payroll service needs the employee's gender for professional tax
/// and the name/code for the pay slip header.
pub trait EmployeeRepositoryTrait: Send + Sync {
    /// Retrieves an employee by ID.
    ///
    /// Returns `Error::EmployeeNotFound` when no such employee exists.
    fn get_by_id(&self, employee_id: &str) -> Result<Employee>;

    /// Lists every employee of a company, whatever their status.
    fn list_by_company(&self, company_id: &str) -> Result<Vec<Employee>>;
}
