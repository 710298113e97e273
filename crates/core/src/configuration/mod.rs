//! Payroll configuration module - canonical schema, legacy schema, and the store trait.

mod configuration_model;
mod configuration_traits;
mod configuration_versions;


pub use configuration_model::PayrollConfiguration;
pub use configuration_traits::PayrollConfigurationRepositoryTrait;
pub use configuration_versions::{LegacyPayrollConfiguration, VersionedPayrollConfiguration};
