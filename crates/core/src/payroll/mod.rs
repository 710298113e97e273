//! Payroll module - calculation engine, tax rules, models, and the payroll service.

mod payroll_calculator;
mod payroll_constants;
mod payroll_errors;
mod payroll_model;
mod payroll_service;
mod payroll_traits;
mod tax_rules;

#[cfg(test)]
mod payroll_service_tests;

pub use payroll_calculator::{compute_gross, compute_payroll, compute_statutory_deductions};
pub use payroll_constants::{ESI_GROSS_CEILING, MAX_MONETARY_AMOUNT};
pub use payroll_errors::PayrollError;
pub(crate) use payroll_errors::{ensure_amount, ensure_percentage};
pub use payroll_model::{
    CalculationContext, GrossBreakdown, PayPeriod, PayrollFailure, PayrollLineItem, PayrollRun,
    Payslip, SalaryStructure, StatutoryDeductions,
};
pub use payroll_service::PayrollService;
pub use payroll_traits::{PayrollServiceTrait, SalaryStructureRepositoryTrait};
pub use tax_rules::{compute_income_tax, compute_professional_tax};
