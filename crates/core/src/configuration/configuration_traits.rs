//! Payroll configuration store contract.

use super::configuration_model::PayrollConfiguration;
use crate::errors::Result;

/// Read access to company payroll configurations.
///
/// Implementations migrate stored documents to the current schema (see
/// `VersionedPayrollConfiguration::into_current`) before returning them.
pub trait PayrollConfigurationRepositoryTrait: Send + Sync {
    /// Returns the active configuration of a company.
    ///
    /// `Ok(None)` means the company has not set up payroll yet; it is not
    /// an error at this level.
    fn get_by_company_id(&self, company_id: &str) -> Result<Option<PayrollConfiguration>>;
}
