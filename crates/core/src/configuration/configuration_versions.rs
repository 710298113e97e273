//! Versioned payroll configuration documents and the legacy schema.

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::configuration_model::PayrollConfiguration;
use crate::constants::{
    CONFIGURATION_SCHEMA_VERSION_FIELD, CURRENT_CONFIGURATION_SCHEMA_VERSION,
    LEGACY_CONFIGURATION_SCHEMA_VERSION,
};
use crate::errors::{Error, Result, ValidationError};

/// Every field of the current schema that version 1 never had. An
/// unversioned document carrying any of them was written by the current
/// configuration form.
const CURRENT_ONLY_FIELDS: &[&str] = &[
    "hraApplicable",
    "daApplicable",
    "conveyanceApplicable",
    "medicalApplicable",
    "pfApplicable",
    "esiApplicable",
    "conveyanceAmount",
    "medicalAllowanceAmount",
    "pfEmployeePercentage",
    "pfEmployerPercentage",
    "esiEmployeePercentage",
    "esiEmployerPercentage",
    "taxSlab1Rate",
    "taxSlab2Rate",
    "taxSlab3Rate",
];

/// Schema version 1: flat percentages applied unconditionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPayrollConfiguration {
    pub company_id: String,
    #[serde(default)]
    pub hra_percentage: Decimal,
    #[serde(default)]
    pub da_percentage: Decimal,
    #[serde(default)]
    pub pf_percentage: Decimal,
    #[serde(default)]
    pub tax_slab1_limit: Decimal,
    #[serde(default)]
    pub tax_slab1_percentage: Decimal,
    #[serde(default)]
    pub tax_slab2_limit: Decimal,
    #[serde(default)]
    pub tax_slab2_percentage: Decimal,
    /// Never read by the version 1 calculation; dropped on migration.
    #[serde(default)]
    pub tax_slab3_percentage: Decimal,
}

impl From<LegacyPayrollConfiguration> for PayrollConfiguration {
    /// Version 1 charged its slab 1 percentage above limit 1 and its slab 2
    /// percentage above limit 2, so both shift up one slab here.
    fn from(legacy: LegacyPayrollConfiguration) -> Self {
        PayrollConfiguration {
            company_id: legacy.company_id,
            hra_applicable: true,
            hra_percentage: legacy.hra_percentage,
            da_applicable: true,
            da_percentage: legacy.da_percentage,
            pf_applicable: true,
            pf_employee_percentage: legacy.pf_percentage,
            tax_slab1_limit: legacy.tax_slab1_limit,
            tax_slab1_rate: Decimal::ZERO,
            tax_slab2_limit: legacy.tax_slab2_limit,
            tax_slab2_rate: legacy.tax_slab1_percentage,
            tax_slab3_rate: legacy.tax_slab2_percentage,
            ..Default::default()
        }
    }
}

/// A stored payroll configuration in any supported schema version.
///
/// On the wire the version is the `schemaVersion` field. Documents without
/// it predate versioning; they are read as version 2 when they carry any
/// version 2 field and as version 1 otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionedPayrollConfiguration {
    Legacy(LegacyPayrollConfiguration),
    Current(PayrollConfiguration),
}

impl VersionedPayrollConfiguration {
    pub fn schema_version(&self) -> u64 {
        match self {
            VersionedPayrollConfiguration::Legacy(_) => LEGACY_CONFIGURATION_SCHEMA_VERSION,
            VersionedPayrollConfiguration::Current(_) => CURRENT_CONFIGURATION_SCHEMA_VERSION,
        }
    }

    pub fn company_id(&self) -> &str {
        match self {
            VersionedPayrollConfiguration::Legacy(config) => &config.company_id,
            VersionedPayrollConfiguration::Current(config) => &config.company_id,
        }
    }

    /// Migrates the document to the current schema.
    pub fn into_current(self) -> PayrollConfiguration {
        match self {
            VersionedPayrollConfiguration::Legacy(legacy) => {
                debug!(
                    "Migrating payroll configuration for company {} from schema version {}",
                    legacy.company_id, LEGACY_CONFIGURATION_SCHEMA_VERSION
                );
                legacy.into()
            }
            VersionedPayrollConfiguration::Current(config) => config,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(mut value: Value) -> Result<Self> {
        let object = value.as_object_mut().ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(
                "Payroll configuration must be a JSON object".to_string(),
            ))
        })?;

        let version = match object.remove(CONFIGURATION_SCHEMA_VERSION_FIELD) {
            None | Some(Value::Null) => {
                if CURRENT_ONLY_FIELDS.iter().any(|f| object.contains_key(*f)) {
                    CURRENT_CONFIGURATION_SCHEMA_VERSION
                } else {
                    LEGACY_CONFIGURATION_SCHEMA_VERSION
                }
            }
            Some(Value::Number(n)) => n.as_u64().ok_or_else(|| invalid_version(&n))?,
            Some(Value::String(s)) => s.trim().parse::<u64>().map_err(|_| invalid_version(&s))?,
            Some(other) => return Err(invalid_version(&other)),
        };

        match version {
            LEGACY_CONFIGURATION_SCHEMA_VERSION => Ok(VersionedPayrollConfiguration::Legacy(
                serde_json::from_value(value)?,
            )),
            CURRENT_CONFIGURATION_SCHEMA_VERSION => Ok(VersionedPayrollConfiguration::Current(
                serde_json::from_value(value)?,
            )),
            other => Err(Error::UnsupportedSchemaVersion(other)),
        }
    }

    /// JSON form including the `schemaVersion` field.
    pub fn to_value(&self) -> Result<Value> {
        let mut value = match self {
            VersionedPayrollConfiguration::Legacy(config) => serde_json::to_value(config)?,
            VersionedPayrollConfiguration::Current(config) => serde_json::to_value(config)?,
        };
        if let Value::Object(ref mut map) = value {
            map.insert(
                CONFIGURATION_SCHEMA_VERSION_FIELD.to_string(),
                Value::from(self.schema_version()),
            );
        }
        Ok(value)
    }
}

impl From<PayrollConfiguration> for VersionedPayrollConfiguration {
    fn from(config: PayrollConfiguration) -> Self {
        VersionedPayrollConfiguration::Current(config)
    }
}

impl Serialize for VersionedPayrollConfiguration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for VersionedPayrollConfiguration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

fn invalid_version(raw: &dyn std::fmt::Display) -> Error {
    Error::Validation(ValidationError::InvalidInput(format!(
        "{} must be a positive integer, got {}",
        CONFIGURATION_SCHEMA_VERSION_FIELD, raw
    )))
}
