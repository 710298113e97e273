//! In-memory stores backed by a company data file.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use paymaster_core::configuration::PayrollConfigurationRepositoryTrait;
use paymaster_core::employees::EmployeeRepositoryTrait;
use paymaster_core::errors::{Error, Result};
use paymaster_core::{
    Employee, PayrollConfiguration, SalaryStructure, SalaryStructureRepositoryTrait,
    VersionedPayrollConfiguration,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
}

/// On-disk layout of a company's payroll data.
///
/// The configuration may be stored in any supported schema version, or be
/// `null` when the company has not set up payroll yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDataFile {
    pub company: Company,
    #[serde(default)]
    pub configuration: Option<VersionedPayrollConfiguration>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub salary_structures: Vec<SalaryStructure>,
}

impl CompanyDataFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read company data file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Invalid company data file {}", path.display()))
    }
}

/// Read-only store over one company's data, with the configuration already
/// migrated to the current schema.
#[derive(Debug, Clone)]
pub struct InMemoryPayrollStore {
    company: Company,
    configuration: Option<PayrollConfiguration>,
    employees: Vec<Employee>,
    salary_structures: Vec<SalaryStructure>,
}

impl InMemoryPayrollStore {
    pub fn company(&self) -> &Company {
        &self.company
    }
}

impl From<CompanyDataFile> for InMemoryPayrollStore {
    fn from(data: CompanyDataFile) -> Self {
        let configuration = data.configuration.map(|doc| {
            if doc.company_id() != data.company.id {
                tracing::warn!(
                    "Configuration belongs to company {}, not {}; it will not be used",
                    doc.company_id(),
                    data.company.id
                );
            }
            doc.into_current()
        });
        InMemoryPayrollStore {
            company: data.company,
            configuration,
            employees: data.employees,
            salary_structures: data.salary_structures,
        }
    }
}

impl PayrollConfigurationRepositoryTrait for InMemoryPayrollStore {
    fn get_by_company_id(&self, company_id: &str) -> Result<Option<PayrollConfiguration>> {
        Ok(self
            .configuration
            .as_ref()
            .filter(|config| config.company_id == company_id)
            .cloned())
    }
}

impl SalaryStructureRepositoryTrait for InMemoryPayrollStore {
    fn get_by_employee(
        &self,
        employee_id: &str,
        company_id: &str,
    ) -> Result<Option<SalaryStructure>> {
        Ok(self
            .salary_structures
            .iter()
            .find(|s| s.employee_id == employee_id && s.company_id == company_id)
            .cloned())
    }
}

impl EmployeeRepositoryTrait for InMemoryPayrollStore {
    fn get_by_id(&self, employee_id: &str) -> Result<Employee> {
        self.employees
            .iter()
            .find(|e| e.id == employee_id)
            .cloned()
            .ok_or_else(|| Error::EmployeeNotFound(employee_id.to_string()))
    }

    fn list_by_company(&self, company_id: &str) -> Result<Vec<Employee>> {
        Ok(self
            .employees
            .iter()
            .filter(|e| e.company_id == company_id)
            .cloned()
            .collect())
    }
}
