//! Subcommand arguments and handlers.
//!
//! Handlers return the text to print so that the binary only decides where
//! it goes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, ValueEnum};
use serde::Serialize;

use paymaster_core::{
    compute_payroll, CalculationContext, Gender, PayPeriod, PayrollService, PayrollServiceTrait,
    SalaryStructure, VersionedPayrollConfiguration,
};

use crate::config::Config;
use crate::render;
use crate::store::{CompanyDataFile, InMemoryPayrollStore};

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Arguments for the compute subcommand.
#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Salary structure JSON file.
    #[arg(long)]
    pub structure: PathBuf,

    /// Payroll configuration JSON file, any supported schema version.
    #[arg(long)]
    pub config: PathBuf,

    /// Calendar month, 1 to 12.
    #[arg(long)]
    pub month: u32,

    /// MALE, FEMALE or OTHER.
    #[arg(long)]
    pub gender: Gender,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Arguments for the run subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Company data file.
    #[arg(long)]
    pub data: PathBuf,

    /// Pay period as YYYY-MM.
    #[arg(long)]
    pub period: PayPeriod,

    /// Generate a single payslip for this employee instead of a company run.
    #[arg(long)]
    pub employee: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Arguments for the migrate-config subcommand.
#[derive(Args, Debug)]
pub struct MigrateConfigArgs {
    /// Payroll configuration JSON file.
    #[arg(long)]
    pub config: PathBuf,
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_configuration(path: &Path) -> anyhow::Result<VersionedPayrollConfiguration> {
    VersionedPayrollConfiguration::from_json(&read_file(path)?)
        .with_context(|| format!("Invalid payroll configuration in {}", path.display()))
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn compute(args: &ComputeArgs, config: &Config) -> anyhow::Result<String> {
    let structure: SalaryStructure = serde_json::from_str(&read_file(&args.structure)?)
        .with_context(|| format!("Invalid salary structure in {}", args.structure.display()))?;
    let configuration = load_configuration(&args.config)?.into_current();
    let context = CalculationContext::new(args.month, args.gender)?;

    let item = compute_payroll(&structure, Some(&configuration), &context)?;
    match args.format {
        OutputFormat::Json => to_json(&item.rounded(config.display_precision)),
        OutputFormat::Text => Ok(render::line_item_text(&item, config.display_precision)),
    }
}

pub fn run(args: &RunArgs, config: &Config) -> anyhow::Result<String> {
    let store = Arc::new(InMemoryPayrollStore::from(CompanyDataFile::load(&args.data)?));
    let company_id = store.company().id.clone();
    let service = PayrollService::new(store.clone(), store.clone(), store);

    match &args.employee {
        Some(employee_id) => {
            let payslip = service
                .generate_payslip(&company_id, employee_id, args.period)
                .with_context(|| {
                    format!("Could not generate payslip for employee {}", employee_id)
                })?;
            match args.format {
                OutputFormat::Json => {
                    to_json(&render::rounded_payslip(&payslip, config.display_precision))
                }
                OutputFormat::Text => Ok(render::payslip_text(&payslip, config.display_precision)),
            }
        }
        None => {
            let run = service
                .generate_company_payroll(&company_id, args.period)
                .with_context(|| format!("Payroll run failed for company {}", company_id))?;
            match args.format {
                OutputFormat::Json => to_json(&render::rounded_run(&run, config.display_precision)),
                OutputFormat::Text => Ok(render::run_text(&run, config.display_precision)),
            }
        }
    }
}

pub fn migrate_config(args: &MigrateConfigArgs) -> anyhow::Result<String> {
    let document = load_configuration(&args.config)?;
    let from_version = document.schema_version();
    let current = document.into_current();
    current
        .validate()
        .with_context(|| format!("Migrated configuration for {} is invalid", current.company_id))?;
    tracing::info!(
        "Configuration for company {} migrated from schema version {}",
        current.company_id,
        from_version
    );
    Ok(serde_json::to_string_pretty(
        &VersionedPayrollConfiguration::from(current).to_value()?,
    )?)
}
