//! PayMaster Core - payroll computation engine, domain models, and store traits.
//!
//! The engine in [`payroll`] is a set of pure functions: it never reads
//! clocks, globals, or storage. Stores for payroll configurations, salary
//! structures and employees are described as traits so that callers can
//! plug in whatever persistence they use.

pub mod configuration;
pub mod constants;
pub mod employees;
pub mod errors;
pub mod payroll;

// Re-export the engine entry points and the common domain types
pub use configuration::{PayrollConfiguration, VersionedPayrollConfiguration};
pub use employees::{Employee, EmployeeStatus, Gender};
pub use payroll::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
