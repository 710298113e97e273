//! Employees module - domain models and traits.

mod employees_model;
mod employees_traits;


pub use employees_model::{Employee, EmployeeStatus, Gender};
pub use employees_traits::EmployeeRepositoryTrait;
