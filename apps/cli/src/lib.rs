//! # paymaster-cli
//!
//! Thin front end over `paymaster-core`. Argument parsing and file loading
//! live here; every amount is computed by the core engine.
//!
//! ## Subcommands
//!
//! - `compute`: one line item from a salary structure and a configuration file
//! - `run`: payroll for a whole company data file, or one employee in it
//! - `migrate-config`: rewrite a configuration document in the current schema

pub mod commands;
pub mod config;
pub mod main_lib;
pub mod render;
pub mod store;
