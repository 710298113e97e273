//! Tests for PayrollService orchestration over the store traits.

#[cfg(test)]
mod tests {
    use crate::configuration::{
        LegacyPayrollConfiguration, PayrollConfiguration, PayrollConfigurationRepositoryTrait,
    };
    use crate::employees::{Employee, EmployeeRepositoryTrait, EmployeeStatus, Gender};
    use crate::errors::{Error, Result};
    use crate::payroll::{
        PayPeriod, PayrollError, PayrollService, PayrollServiceTrait, SalaryStructure,
        SalaryStructureRepositoryTrait,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    // =========================================================================
    // Mock stores
    // =========================================================================

    #[derive(Default)]
    struct MockConfigurationRepository {
        configurations: Mutex<HashMap<String, PayrollConfiguration>>,
    }

    impl MockConfigurationRepository {
        fn with(config: PayrollConfiguration) -> Self {
            let repo = Self::default();
            repo.configurations
                .lock()
                .unwrap()
                .insert(config.company_id.clone(), config);
            repo
        }
    }

    impl PayrollConfigurationRepositoryTrait for MockConfigurationRepository {
        fn get_by_company_id(&self, company_id: &str) -> Result<Option<PayrollConfiguration>> {
            Ok(self.configurations.lock().unwrap().get(company_id).cloned())
        }
    }

    #[derive(Default)]
    struct MockSalaryStructureRepository {
        structures: Mutex<Vec<SalaryStructure>>,
        fail: bool,
    }

    impl SalaryStructureRepositoryTrait for MockSalaryStructureRepository {
        fn get_by_employee(
            &self,
            employee_id: &str,
            company_id: &str,
        ) -> Result<Option<SalaryStructure>> {
            if self.fail {
                return Err(Error::Repository("salary store unavailable".to_string()));
            }
            Ok(self
                .structures
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.employee_id == employee_id && s.company_id == company_id)
                .cloned())
        }
    }

    #[derive(Default)]
    struct MockEmployeeRepository {
        employees: Mutex<Vec<Employee>>,
    }

    impl EmployeeRepositoryTrait for MockEmployeeRepository {
        fn get_by_id(&self, employee_id: &str) -> Result<Employee> {
            self.employees
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.id == employee_id)
                .cloned()
                .ok_or_else(|| Error::EmployeeNotFound(employee_id.to_string()))
        }

        fn list_by_company(&self, company_id: &str) -> Result<Vec<Employee>> {
            Ok(self
                .employees
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.company_id == company_id)
                .cloned()
                .collect())
        }
    }

    // =========================================================================
    // Fixtures
    // =========================================================================

    const COMPANY: &str = "c-1";

    fn employee(id: &str, gender: Gender, status: EmployeeStatus) -> Employee {
        Employee {
            id: id.to_string(),
            company_id: COMPANY.to_string(),
            emp_code: format!("EMP-{}", id),
            name: format!("Employee {}", id),
            gender,
            status,
        }
    }

    fn salary(employee_id: &str, basic: Decimal, special: Decimal) -> SalaryStructure {
        SalaryStructure {
            employee_id: employee_id.to_string(),
            company_id: COMPANY.to_string(),
            basic_salary: basic,
            special_allowance: special,
            bonus_amount: Decimal::ZERO,
        }
    }

    fn config() -> PayrollConfiguration {
        PayrollConfiguration {
            company_id: COMPANY.to_string(),
            hra_applicable: true,
            hra_percentage: dec!(50),
            pf_applicable: true,
            pf_employee_percentage: dec!(12),
            ..Default::default()
        }
    }

    fn june() -> PayPeriod {
        PayPeriod::new(2026, 6).unwrap()
    }

    fn service(
        config: Option<PayrollConfiguration>,
        employees: Vec<Employee>,
        structures: Vec<SalaryStructure>,
    ) -> PayrollService {
        let configurations = match config {
            Some(config) => MockConfigurationRepository::with(config),
            None => MockConfigurationRepository::default(),
        };
        PayrollService::new(
            Arc::new(configurations),
            Arc::new(MockSalaryStructureRepository {
                structures: Mutex::new(structures),
                fail: false,
            }),
            Arc::new(MockEmployeeRepository {
                employees: Mutex::new(employees),
            }),
        )
    }

    // =========================================================================
    // Single employee
    // =========================================================================

    #[test]
    fn test_preview_payroll() {
        let svc = service(
            Some(config()),
            vec![employee("1", Gender::Male, EmployeeStatus::Active)],
            vec![salary("1", dec!(30000), dec!(2000))],
        );

        let item = svc.preview_payroll(COMPANY, "1", june()).unwrap();
        assert_eq!(item.gross_salary, dec!(47000));
        assert_eq!(item.net_salary, dec!(43200));
    }

    #[test]
    fn test_generate_payslip_carries_employee_details() {
        let svc = service(
            Some(config()),
            vec![employee("1", Gender::Female, EmployeeStatus::Active)],
            vec![salary("1", dec!(30000), dec!(2000))],
        );

        let slip = svc
            .generate_payslip(COMPANY, "1", PayPeriod::new(2026, 2).unwrap())
            .unwrap();
        assert_eq!(slip.employee_name, "Employee 1");
        assert_eq!(slip.emp_code, "EMP-1");
        assert_eq!(slip.period.to_string(), "2026-02");
        // Female above 25,000 in February
        assert_eq!(slip.line_item.professional_tax_amount, dec!(300));
        assert!(uuid::Uuid::parse_str(&slip.id).is_ok());
    }

    #[test]
    fn test_preview_without_configuration() {
        let svc = service(
            None,
            vec![employee("1", Gender::Male, EmployeeStatus::Active)],
            vec![salary("1", dec!(30000), dec!(2000))],
        );
        match svc.preview_payroll(COMPANY, "1", june()) {
            Err(Error::Payroll(PayrollError::ConfigurationMissing { company_id })) => {
                assert_eq!(company_id, COMPANY)
            }
            other => panic!("Expected ConfigurationMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_preview_without_salary_structure() {
        let svc = service(
            Some(config()),
            vec![employee("1", Gender::Male, EmployeeStatus::Active)],
            vec![],
        );
        assert!(matches!(
            svc.preview_payroll(COMPANY, "1", june()),
            Err(Error::SalaryStructureNotFound { .. })
        ));
    }

    #[test]
    fn test_employee_of_another_company_is_not_found() {
        let mut outsider = employee("9", Gender::Male, EmployeeStatus::Active);
        outsider.company_id = "c-2".to_string();
        let svc = service(Some(config()), vec![outsider], vec![]);

        assert!(matches!(
            svc.preview_payroll(COMPANY, "9", june()),
            Err(Error::EmployeeNotFound(id)) if id == "9"
        ));
    }

    #[test]
    fn test_legacy_configuration_after_migration() {
        let legacy = LegacyPayrollConfiguration {
            company_id: COMPANY.to_string(),
            hra_percentage: dec!(40),
            da_percentage: dec!(10),
            pf_percentage: dec!(12),
            tax_slab1_limit: dec!(250000),
            tax_slab1_percentage: dec!(5),
            tax_slab2_limit: dec!(1000000),
            tax_slab2_percentage: dec!(20),
            tax_slab3_percentage: dec!(30),
        };
        let svc = service(
            Some(legacy.into()),
            vec![employee("1", Gender::Male, EmployeeStatus::Active)],
            vec![salary("1", dec!(30000), dec!(0))],
        );

        let item = svc.preview_payroll(COMPANY, "1", june()).unwrap();
        // 30,000 + 40% HRA + 10% DA
        assert_eq!(item.gross_salary, dec!(45000));
        assert_eq!(item.pf_employee_amount, dec!(3600));
        // Annual 540,000 is above the first limit: old slab 1 percentage
        assert_eq!(item.income_tax_amount, dec!(2250));
    }

    // =========================================================================
    // Company run
    // =========================================================================

    #[test]
    fn test_company_payroll_continues_past_failures() {
        let svc = service(
            Some(config()),
            vec![
                employee("1", Gender::Male, EmployeeStatus::Active),
                employee("2", Gender::Female, EmployeeStatus::OnLeave),
                employee("3", Gender::Other, EmployeeStatus::Active),
            ],
            vec![
                salary("1", dec!(30000), dec!(2000)),
                salary("2", dec!(10000), dec!(0)),
                salary("3", dec!(-5), dec!(0)),
            ],
        );

        let run = svc.generate_company_payroll(COMPANY, june()).unwrap();
        assert_eq!(run.payslips.len(), 2);
        assert_eq!(run.failures.len(), 1);
        assert_eq!(run.failures[0].employee_id, "3");
        assert!(run.failures[0].reason.contains("basicSalary"));

        // 47,000 + (10,000 + 5,000 HRA)
        assert_eq!(run.total_gross, dec!(62000));
        assert_eq!(run.total_net, run.total_gross - run.total_deductions);
    }

    #[test]
    fn test_company_payroll_skips_inactive_employees() {
        let svc = service(
            Some(config()),
            vec![
                employee("1", Gender::Male, EmployeeStatus::Active),
                employee("2", Gender::Male, EmployeeStatus::Inactive),
            ],
            vec![salary("1", dec!(30000), dec!(2000))],
        );

        let run = svc.generate_company_payroll(COMPANY, june()).unwrap();
        assert_eq!(run.payslips.len(), 1);
        assert!(run.failures.is_empty());
        assert_eq!(run.payslips[0].employee_id, "1");
    }

    #[test]
    fn test_company_payroll_without_configuration_fails() {
        let svc = service(
            None,
            vec![employee("1", Gender::Male, EmployeeStatus::Active)],
            vec![salary("1", dec!(30000), dec!(2000))],
        );
        assert!(matches!(
            svc.generate_company_payroll(COMPANY, june()),
            Err(Error::Payroll(PayrollError::ConfigurationMissing { .. }))
        ));
    }

    #[test]
    fn test_store_failures_are_reported_per_employee() {
        let svc = PayrollService::new(
            Arc::new(MockConfigurationRepository::with(config())),
            Arc::new(MockSalaryStructureRepository {
                structures: Mutex::new(vec![]),
                fail: true,
            }),
            Arc::new(MockEmployeeRepository {
                employees: Mutex::new(vec![employee("1", Gender::Male, EmployeeStatus::Active)]),
            }),
        );

        let run = svc.generate_company_payroll(COMPANY, june()).unwrap();
        assert!(run.payslips.is_empty());
        assert!(run.failures[0].reason.contains("salary store unavailable"));
    }

    #[test]
    fn test_company_with_no_employees() {
        let svc = service(Some(config()), vec![], vec![]);
        let run = svc.generate_company_payroll(COMPANY, june()).unwrap();
        assert!(run.payslips.is_empty());
        assert_eq!(run.total_net, Decimal::ZERO);
    }
}
