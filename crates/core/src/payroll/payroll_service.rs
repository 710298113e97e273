use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};
use rayon::prelude::*;
use uuid::Uuid;

use super::payroll_calculator::compute_payroll;
use super::payroll_errors::PayrollError;
use super::payroll_model::{PayPeriod, PayrollFailure, PayrollLineItem, PayrollRun, Payslip};
use super::payroll_traits::{PayrollServiceTrait, SalaryStructureRepositoryTrait};
use crate::configuration::{PayrollConfiguration, PayrollConfigurationRepositoryTrait};
use crate::employees::{Employee, EmployeeRepositoryTrait};
use crate::errors::{Error, Result};

pub struct PayrollService {
    configuration_repository: Arc<dyn PayrollConfigurationRepositoryTrait>,
    salary_structure_repository: Arc<dyn SalaryStructureRepositoryTrait>,
    employee_repository: Arc<dyn EmployeeRepositoryTrait>,
}

impl PayrollService {
    pub fn new(
        configuration_repository: Arc<dyn PayrollConfigurationRepositoryTrait>,
        salary_structure_repository: Arc<dyn SalaryStructureRepositoryTrait>,
        employee_repository: Arc<dyn EmployeeRepositoryTrait>,
    ) -> Self {
        PayrollService {
            configuration_repository,
            salary_structure_repository,
            employee_repository,
        }
    }

    fn require_configuration(&self, company_id: &str) -> Result<PayrollConfiguration> {
        self.configuration_repository
            .get_by_company_id(company_id)?
            .ok_or_else(|| {
                Error::Payroll(PayrollError::ConfigurationMissing {
                    company_id: company_id.to_string(),
                })
            })
    }

    fn load_employee(&self, company_id: &str, employee_id: &str) -> Result<Employee> {
        let employee = self.employee_repository.get_by_id(employee_id)?;
        // An employee from another company is treated as unknown here
        if employee.company_id != company_id {
            return Err(Error::EmployeeNotFound(employee_id.to_string()));
        }
        Ok(employee)
    }

    fn compute_for_employee(
        &self,
        employee: &Employee,
        config: &PayrollConfiguration,
        period: PayPeriod,
    ) -> Result<PayrollLineItem> {
        let structure = self
            .salary_structure_repository
            .get_by_employee(&employee.id, &employee.company_id)?
            .ok_or_else(|| Error::SalaryStructureNotFound {
                employee_id: employee.id.clone(),
                company_id: employee.company_id.clone(),
            })?;

        let context = period.context_for(employee.gender);
        let line_item = compute_payroll(&structure, Some(config), &context)?;
        debug!(
            "Computed payroll for employee {} ({}): gross {}, net {}",
            employee.id, period, line_item.gross_salary, line_item.net_salary
        );
        Ok(line_item)
    }

    fn build_payslip(
        employee: &Employee,
        period: PayPeriod,
        line_item: PayrollLineItem,
    ) -> Payslip {
        Payslip {
            id: Uuid::now_v7().to_string(),
            company_id: employee.company_id.clone(),
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            emp_code: employee.emp_code.clone(),
            period,
            line_item,
            generated_at: Utc::now(),
        }
    }
}

impl PayrollServiceTrait for PayrollService {
    fn preview_payroll(
        &self,
        company_id: &str,
        employee_id: &str,
        period: PayPeriod,
    ) -> Result<PayrollLineItem> {
        let config = self.require_configuration(company_id)?;
        let employee = self.load_employee(company_id, employee_id)?;
        self.compute_for_employee(&employee, &config, period)
    }

    fn generate_payslip(
        &self,
        company_id: &str,
        employee_id: &str,
        period: PayPeriod,
    ) -> Result<Payslip> {
        let config = self.require_configuration(company_id)?;
        let employee = self.load_employee(company_id, employee_id)?;
        let line_item = self.compute_for_employee(&employee, &config, period)?;
        info!(
            "Generated payslip for employee {} in company {} for {}",
            employee.id, company_id, period
        );
        Ok(Self::build_payslip(&employee, period, line_item))
    }

    fn generate_company_payroll(&self, company_id: &str, period: PayPeriod) -> Result<PayrollRun> {
        let config = self.require_configuration(company_id)?;
        let employees = self.employee_repository.list_by_company(company_id)?;

        let (payable, skipped): (Vec<Employee>, Vec<Employee>) = employees
            .into_iter()
            .partition(|employee| employee.status.is_payable());
        if !skipped.is_empty() {
            debug!(
                "Skipping {} inactive employee(s) of company {}",
                skipped.len(),
                company_id
            );
        }

        info!(
            "Running payroll for {} employee(s) of company {} for {}",
            payable.len(),
            company_id,
            period
        );

        let results: Vec<(&Employee, Result<PayrollLineItem>)> = payable
            .par_iter()
            .map(|employee| (employee, self.compute_for_employee(employee, &config, period)))
            .collect();

        let mut payslips = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for (employee, result) in results {
            match result {
                Ok(line_item) => payslips.push(Self::build_payslip(employee, period, line_item)),
                Err(e) => {
                    warn!(
                        "Payroll failed for employee {} in company {}: {}",
                        employee.id, company_id, e
                    );
                    failures.push(PayrollFailure {
                        employee_id: employee.id.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let run = PayrollRun::new(company_id, period, payslips, failures, Utc::now());
        info!(
            "Payroll run for company {} ({}) finished: {} payslip(s), {} failure(s), net total {}",
            company_id,
            period,
            run.payslips.len(),
            run.failures.len(),
            run.total_net
        );
        Ok(run)
    }
}
