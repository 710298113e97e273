//! # paymaster CLI entry point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

use paymaster_cli::commands::{self, ComputeArgs, MigrateConfigArgs, RunArgs};
use paymaster_cli::config::Config;
use paymaster_cli::main_lib::{configure_thread_pool, init_tracing};

/// PayMaster payroll engine.
///
/// Computes salary line items, runs company payroll from a data file, and
/// migrates payroll configuration documents to the current schema.
#[derive(Parser, Debug)]
#[command(name = "paymaster", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Compute one line item from a salary structure and a configuration.
    Compute(ComputeArgs),
    /// Run payroll for a company data file.
    Run(RunArgs),
    /// Rewrite a configuration document in the current schema version.
    MigrateConfig(MigrateConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(&config);
    configure_thread_pool(&config)?;

    let cli = Cli::parse();
    let output = match &cli.command {
        Commands::Compute(args) => commands::compute(args, &config)?,
        Commands::Run(args) => commands::run(args, &config)?,
        Commands::MigrateConfig(args) => commands::migrate_config(args)?,
    };
    println!("{}", output);
    Ok(())
}
