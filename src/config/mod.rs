//! Configuration loading for the payroll shell.
//!
//! This module loads the shell's presentation settings (window title,
//! employment type labels, log filter) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_roster::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Window title: {}", loader.config().title);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader};
pub use types::{EmploymentLabels, ShellConfig};
