//! The payroll calculation engine.
//!
//! Pure functions over a salary structure, a payroll configuration and a
//! calculation context. Inputs are validated up front; nothing is clamped
//! or coerced, and the same inputs always produce the same line item.

use rust_decimal::Decimal;

use super::payroll_constants::ESI_GROSS_CEILING;
use super::payroll_errors::{ensure_amount, PayrollError};
use super::payroll_model::{
    CalculationContext, GrossBreakdown, PayrollLineItem, SalaryStructure, StatutoryDeductions,
};
use super::tax_rules::{compute_professional_tax, income_tax};
use crate::configuration::PayrollConfiguration;

pub(crate) fn percent_of(amount: Decimal, percentage: Decimal) -> Decimal {
    amount * percentage / Decimal::ONE_HUNDRED
}

fn when(applicable: bool, amount: Decimal) -> Decimal {
    if applicable {
        amount
    } else {
        Decimal::ZERO
    }
}

/// Earnings gated by the configuration and the resulting gross salary.
pub fn compute_gross(
    structure: &SalaryStructure,
    config: &PayrollConfiguration,
) -> Result<GrossBreakdown, PayrollError> {
    structure.validate()?;
    config.validate()?;

    let basic = structure.basic_salary;
    let hra = when(config.hra_applicable, percent_of(basic, config.hra_percentage));
    let dearness_allowance = when(config.da_applicable, percent_of(basic, config.da_percentage));
    let conveyance = when(config.conveyance_applicable, config.conveyance_amount);
    let medical_allowance = when(config.medical_applicable, config.medical_allowance_amount);

    let gross_salary = basic
        + hra
        + dearness_allowance
        + conveyance
        + medical_allowance
        + structure.special_allowance
        + structure.bonus_amount;

    Ok(GrossBreakdown {
        hra,
        dearness_allowance,
        conveyance,
        medical_allowance,
        gross_salary,
    })
}

/// PF on basic salary and ESI on gross salary, employee and employer side.
///
/// ESI only applies while the gross stays at or below 21,000.
pub fn compute_statutory_deductions(
    gross_salary: Decimal,
    basic_salary: Decimal,
    config: &PayrollConfiguration,
) -> Result<StatutoryDeductions, PayrollError> {
    ensure_amount("grossSalary", gross_salary)?;
    ensure_amount("basicSalary", basic_salary)?;
    config.validate()?;
    Ok(statutory_deductions(gross_salary, basic_salary, config))
}

// Inputs must already be validated.
fn statutory_deductions(
    gross_salary: Decimal,
    basic_salary: Decimal,
    config: &PayrollConfiguration,
) -> StatutoryDeductions {
    let esi_eligible = config.esi_applicable && gross_salary <= ESI_GROSS_CEILING;

    StatutoryDeductions {
        pf_employee_amount: when(
            config.pf_applicable,
            percent_of(basic_salary, config.pf_employee_percentage),
        ),
        pf_employer_amount: when(
            config.pf_applicable,
            percent_of(basic_salary, config.pf_employer_percentage),
        ),
        esi_employee_amount: when(
            esi_eligible,
            percent_of(gross_salary, config.esi_employee_percentage),
        ),
        esi_employer_amount: when(
            esi_eligible,
            percent_of(gross_salary, config.esi_employer_percentage),
        ),
    }
}

/// Computes a complete line item.
///
/// A missing configuration is reported as `ConfigurationMissing`; it is
/// never treated as a configuration with every component disabled. Only
/// caller-supplied amounts are bounded; the derived gross may exceed the
/// per-amount maximum.
pub fn compute_payroll(
    structure: &SalaryStructure,
    config: Option<&PayrollConfiguration>,
    context: &CalculationContext,
) -> Result<PayrollLineItem, PayrollError> {
    let config = config.ok_or_else(|| PayrollError::ConfigurationMissing {
        company_id: structure.company_id.clone(),
    })?;
    context.validate()?;
    structure.validate()?;
    config.validate()?;

    let gross = compute_gross(structure, config)?;
    let professional_tax_amount =
        compute_professional_tax(gross.gross_salary, context.employee_gender, context.month)?;
    let statutory = statutory_deductions(gross.gross_salary, structure.basic_salary, config);
    let income_tax_amount = income_tax(gross.gross_salary, config);

    let total_deductions = statutory.pf_employee_amount
        + statutory.esi_employee_amount
        + professional_tax_amount
        + income_tax_amount;
    let net_salary = gross.gross_salary - total_deductions;
    let cost_to_company =
        gross.gross_salary + statutory.pf_employer_amount + statutory.esi_employer_amount;

    Ok(PayrollLineItem {
        basic_salary: structure.basic_salary,
        hra: gross.hra,
        dearness_allowance: gross.dearness_allowance,
        conveyance: gross.conveyance,
        medical_allowance: gross.medical_allowance,
        special_allowance: structure.special_allowance,
        bonus_amount: structure.bonus_amount,
        gross_salary: gross.gross_salary,
        pf_employee_amount: statutory.pf_employee_amount,
        esi_employee_amount: statutory.esi_employee_amount,
        professional_tax_amount,
        income_tax_amount,
        total_deductions,
        net_salary,
        pf_employer_amount: statutory.pf_employer_amount,
        esi_employer_amount: statutory.esi_employer_amount,
        cost_to_company,
    })
}
