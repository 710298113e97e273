//! Payroll domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::payroll_errors::{ensure_amount, ensure_month, PayrollError};
use crate::employees::Gender;

/// Salary structure of one employee within one company.
///
/// Identified by the `(employee_id, company_id)` pair. Created by an
/// explicit save, then only ever updated; never derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryStructure {
    pub employee_id: String,
    pub company_id: String,
    pub basic_salary: Decimal,
    pub special_allowance: Decimal,
    #[serde(default)]
    pub bonus_amount: Decimal,
}

impl SalaryStructure {
    pub fn validate(&self) -> Result<(), PayrollError> {
        ensure_amount("basicSalary", self.basic_salary)?;
        ensure_amount("specialAllowance", self.special_allowance)?;
        ensure_amount("bonusAmount", self.bonus_amount)?;
        Ok(())
    }
}

/// Per-call inputs that are not part of the salary structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationContext {
    /// Calendar month, 1 to 12
    pub month: u32,
    pub employee_gender: Gender,
}

impl CalculationContext {
    pub fn new(month: u32, employee_gender: Gender) -> Result<Self, PayrollError> {
        let context = CalculationContext {
            month,
            employee_gender,
        };
        context.validate()?;
        Ok(context)
    }

    pub fn validate(&self) -> Result<(), PayrollError> {
        ensure_month(self.month)
    }
}

/// A payroll month, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PayPeriod {
    year: i32,
    month: u32,
}

impl PayPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self, PayrollError> {
        ensure_month(month)?;
        NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            PayrollError::InvalidContext(format!("{}-{:02} is not a valid pay period", year, month))
        })?;
        Ok(PayPeriod { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        PayPeriod {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn context_for(&self, employee_gender: Gender) -> CalculationContext {
        CalculationContext {
            month: self.month,
            employee_gender,
        }
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for PayPeriod {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map_err(|e| {
                PayrollError::InvalidContext(format!(
                    "pay period '{}' is not in YYYY-MM format: {}",
                    s, e
                ))
            })?;
        Ok(PayPeriod::from_date(date))
    }
}

impl TryFrom<String> for PayPeriod {
    type Error = PayrollError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PayPeriod> for String {
    fn from(period: PayPeriod) -> Self {
        period.to_string()
    }
}

/// Earnings derived from the configuration, plus the resulting gross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrossBreakdown {
    pub hra: Decimal,
    pub dearness_allowance: Decimal,
    pub conveyance: Decimal,
    pub medical_allowance: Decimal,
    pub gross_salary: Decimal,
}

/// PF and ESI amounts for both sides of the contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatutoryDeductions {
    pub pf_employee_amount: Decimal,
    pub esi_employee_amount: Decimal,
    pub pf_employer_amount: Decimal,
    pub esi_employer_amount: Decimal,
}

/// Fully itemized result of one payroll calculation.
///
/// `net_salary` is always exactly `gross_salary - total_deductions` and is
/// not clamped at zero. Employer contributions feed `cost_to_company` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollLineItem {
    // Earnings
    pub basic_salary: Decimal,
    pub hra: Decimal,
    pub dearness_allowance: Decimal,
    pub conveyance: Decimal,
    pub medical_allowance: Decimal,
    pub special_allowance: Decimal,
    pub bonus_amount: Decimal,
    pub gross_salary: Decimal,

    // Deductions
    pub pf_employee_amount: Decimal,
    pub esi_employee_amount: Decimal,
    pub professional_tax_amount: Decimal,
    pub income_tax_amount: Decimal,
    pub total_deductions: Decimal,

    pub net_salary: Decimal,

    // Employer contributions
    pub pf_employer_amount: Decimal,
    pub esi_employer_amount: Decimal,
    pub cost_to_company: Decimal,
}

impl PayrollLineItem {
    /// Copy with every amount rounded half away from zero, for display.
    pub fn rounded(&self, decimal_places: u32) -> Self {
        let round = |value: Decimal| {
            value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
        };
        PayrollLineItem {
            basic_salary: round(self.basic_salary),
            hra: round(self.hra),
            dearness_allowance: round(self.dearness_allowance),
            conveyance: round(self.conveyance),
            medical_allowance: round(self.medical_allowance),
            special_allowance: round(self.special_allowance),
            bonus_amount: round(self.bonus_amount),
            gross_salary: round(self.gross_salary),
            pf_employee_amount: round(self.pf_employee_amount),
            esi_employee_amount: round(self.esi_employee_amount),
            professional_tax_amount: round(self.professional_tax_amount),
            income_tax_amount: round(self.income_tax_amount),
            total_deductions: round(self.total_deductions),
            net_salary: round(self.net_salary),
            pf_employer_amount: round(self.pf_employer_amount),
            esi_employer_amount: round(self.esi_employer_amount),
            cost_to_company: round(self.cost_to_company),
        }
    }
}

/// A generated pay slip: the line item plus who, when, and for which month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payslip {
    pub id: String,
    pub company_id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub emp_code: String,
    pub period: PayPeriod,
    pub line_item: PayrollLineItem,
    pub generated_at: DateTime<Utc>,
}

/// An employee that could not be paid in a company run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollFailure {
    pub employee_id: String,
    pub reason: String,
}

/// Result of running payroll for every payable employee of a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRun {
    pub company_id: String,
    pub period: PayPeriod,
    pub payslips: Vec<Payslip>,
    pub failures: Vec<PayrollFailure>,
    pub total_gross: Decimal,
    pub total_deductions: Decimal,
    pub total_net: Decimal,
    pub generated_at: DateTime<Utc>,
}

impl PayrollRun {
    pub fn new(
        company_id: &str,
        period: PayPeriod,
        payslips: Vec<Payslip>,
        failures: Vec<PayrollFailure>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let (total_gross, total_deductions, total_net) = payslips.iter().fold(
            (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
            |(gross, deductions, net), slip| {
                (
                    gross + slip.line_item.gross_salary,
                    deductions + slip.line_item.total_deductions,
                    net + slip.line_item.net_salary,
                )
            },
        );
        PayrollRun {
            company_id: company_id.to_string(),
            period,
            payslips,
            failures,
            total_gross,
            total_deductions,
            total_net,
            generated_at,
        }
    }
}
