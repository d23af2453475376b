//! Core data models for the payroll roster.
//!
//! This module contains the employee record and its pay variants.

mod employee;

pub use employee::{Employee, EmployeeId, EmploymentType, PayBasis};
