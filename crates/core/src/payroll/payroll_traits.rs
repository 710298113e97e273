use super::payroll_model::{PayPeriod, PayrollLineItem, PayrollRun, Payslip, SalaryStructure};
use crate::errors::Result;

/// Trait for salary structure storage
pub trait SalaryStructureRepositoryTrait: Send + Sync {
    /// Returns `Ok(None)` when the employee has no structure in that company.
    fn get_by_employee(&self, employee_id: &str, company_id: &str)
        -> Result<Option<SalaryStructure>>;
}

/// Trait for payroll service operations
pub trait PayrollServiceTrait: Send + Sync {
    /// Computes the line item for one employee without producing a pay slip.
    fn preview_payroll(
        &self,
        company_id: &str,
        employee_id: &str,
        period: PayPeriod,
    ) -> Result<PayrollLineItem>;

    fn generate_payslip(
        &self,
        company_id: &str,
        employee_id: &str,
        period: PayPeriod,
    ) -> Result<Payslip>;

    /// Runs payroll for every payable employee of a company.
    ///
    /// Per-employee failures are collected in the run; only a missing
    /// configuration or a store failure aborts the whole run.
    fn generate_company_payroll(&self, company_id: &str, period: PayPeriod) -> Result<PayrollRun>;
}
