//! Employee payroll roster.
//!
//! This crate keeps an in-memory roster of full-time (salaried) and
//! part-time (hourly) employees, computes their pay, and drives add, remove,
//! and display flows through a pluggable prompt-based front end.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod roster;
pub mod shell;
pub mod validation;
