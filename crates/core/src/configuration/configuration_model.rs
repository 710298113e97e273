//! Canonical payroll configuration (schema version 2).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::payroll::{ensure_amount, ensure_percentage, PayrollError};

/// Company-wide payroll rules. One active configuration exists per company.
///
/// Every rate or amount is gated by its `*_applicable` flag: a disabled
/// component contributes zero regardless of the configured value. Fields
/// missing from a JSON document default to `false` / `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PayrollConfiguration {
    pub company_id: String,

    #[serde(default)]
    pub hra_applicable: bool,
    #[serde(default)]
    pub da_applicable: bool,
    #[serde(default)]
    pub conveyance_applicable: bool,
    #[serde(default)]
    pub medical_applicable: bool,
    #[serde(default)]
    pub pf_applicable: bool,
    #[serde(default)]
    pub esi_applicable: bool,

    /// Percentage of basic salary
    #[serde(default)]
    pub hra_percentage: Decimal,
    /// Percentage of basic salary
    #[serde(default)]
    pub da_percentage: Decimal,
    #[serde(default)]
    pub conveyance_amount: Decimal,
    #[serde(default)]
    pub medical_allowance_amount: Decimal,

    /// Percentages of basic salary
    #[serde(default)]
    pub pf_employee_percentage: Decimal,
    #[serde(default)]
    pub pf_employer_percentage: Decimal,
    /// Percentages of gross salary
    #[serde(default)]
    pub esi_employee_percentage: Decimal,
    #[serde(default)]
    pub esi_employer_percentage: Decimal,

    /// Annual income limits and the rates selected above them.
    /// `tax_slab1_rate` is kept for the configuration form; income at or
    /// below slab 1 is never taxed.
    #[serde(default)]
    pub tax_slab1_limit: Decimal,
    #[serde(default)]
    pub tax_slab1_rate: Decimal,
    #[serde(default)]
    pub tax_slab2_limit: Decimal,
    #[serde(default)]
    pub tax_slab2_rate: Decimal,
    #[serde(default)]
    pub tax_slab3_rate: Decimal,
}

impl PayrollConfiguration {
    /// Checks every configured value, whether or not its flag is enabled.
    pub fn validate(&self) -> Result<(), PayrollError> {
        let percentages = [
            ("hraPercentage", self.hra_percentage),
            ("daPercentage", self.da_percentage),
            ("pfEmployeePercentage", self.pf_employee_percentage),
            ("pfEmployerPercentage", self.pf_employer_percentage),
            ("esiEmployeePercentage", self.esi_employee_percentage),
            ("esiEmployerPercentage", self.esi_employer_percentage),
            ("taxSlab1Rate", self.tax_slab1_rate),
            ("taxSlab2Rate", self.tax_slab2_rate),
            ("taxSlab3Rate", self.tax_slab3_rate),
        ];
        for (field, value) in percentages {
            ensure_percentage(field, value)?;
        }

        let amounts = [
            ("conveyanceAmount", self.conveyance_amount),
            ("medicalAllowanceAmount", self.medical_allowance_amount),
            ("taxSlab1Limit", self.tax_slab1_limit),
            ("taxSlab2Limit", self.tax_slab2_limit),
        ];
        for (field, value) in amounts {
            ensure_amount(field, value)?;
        }

        if self.tax_slab2_limit < self.tax_slab1_limit {
            return Err(PayrollError::invalid_amount(
                "taxSlab2Limit",
                self.tax_slab2_limit,
                "slab 2 limit cannot be below the slab 1 limit",
            ));
        }

        Ok(())
    }
}
