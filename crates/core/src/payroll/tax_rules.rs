//! Professional tax and income tax rules.

use rust_decimal::Decimal;

use super::payroll_calculator::percent_of;
use super::payroll_constants::{
    FEBRUARY, MONTHS_PER_YEAR, PT_EXEMPTION_LIMIT, PT_FEBRUARY_AMOUNT, PT_FEMALE_EXEMPTION_LIMIT,
    PT_REDUCED_AMOUNT, PT_REDUCED_SLAB_LIMIT, PT_STANDARD_AMOUNT,
};
use super::payroll_errors::{ensure_amount, ensure_month, PayrollError};
use crate::configuration::PayrollConfiguration;
use crate::employees::Gender;

/// Monthly professional tax under the Maharashtra slabs.
///
/// Women pay 200 above a gross of 25,000 and nothing below. Everyone else
/// pays nothing up to 7,500, 175 up to 10,000 and 200 above. In February any
/// tax above 175 is replaced by 300.
pub fn compute_professional_tax(
    gross_salary: Decimal,
    gender: Gender,
    month: u32,
) -> Result<Decimal, PayrollError> {
    ensure_month(month)?;

    if gross_salary <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    let tax = match gender {
        Gender::Female => {
            if gross_salary > PT_FEMALE_EXEMPTION_LIMIT {
                PT_STANDARD_AMOUNT
            } else {
                Decimal::ZERO
            }
        }
        Gender::Male | Gender::Other => {
            if gross_salary <= PT_EXEMPTION_LIMIT {
                Decimal::ZERO
            } else if gross_salary <= PT_REDUCED_SLAB_LIMIT {
                PT_REDUCED_AMOUNT
            } else {
                PT_STANDARD_AMOUNT
            }
        }
    };

    if month == FEBRUARY && tax > PT_REDUCED_AMOUNT {
        Ok(PT_FEBRUARY_AMOUNT)
    } else {
        Ok(tax)
    }
}

/// Monthly income tax by slab selection on the annualized gross.
///
/// This picks a single rate and applies it to the whole monthly gross; it
/// does not stack marginal rates across brackets.
pub fn compute_income_tax(
    gross_salary: Decimal,
    config: &PayrollConfiguration,
) -> Result<Decimal, PayrollError> {
    ensure_amount("grossSalary", gross_salary)?;
    config.validate()?;
    Ok(income_tax(gross_salary, config))
}

// Inputs must already be validated.
pub(crate) fn income_tax(gross_salary: Decimal, config: &PayrollConfiguration) -> Decimal {
    let annual_gross = gross_salary * MONTHS_PER_YEAR;
    let rate = if annual_gross > config.tax_slab2_limit {
        config.tax_slab3_rate
    } else if annual_gross > config.tax_slab1_limit {
        config.tax_slab2_rate
    } else {
        return Decimal::ZERO;
    };

    percent_of(gross_salary, rate)
}
