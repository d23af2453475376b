//! Configuration types for the payroll shell.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field is
//! optional in the file and falls back to its default.

use serde::Deserialize;

use crate::models::EmploymentType;

/// Labels shown when asking which kind of employee to add.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmploymentLabels {
    /// Label for salaried employees.
    pub full_time: String,
    /// Label for hourly employees.
    pub part_time: String,
}

impl Default for EmploymentLabels {
    fn default() -> Self {
        Self {
            full_time: EmploymentType::FullTime.label().to_string(),
            part_time: EmploymentType::PartTime.label().to_string(),
        }
    }
}

impl EmploymentLabels {
    /// Returns the label configured for `employment_type`.
    pub fn label(&self, employment_type: EmploymentType) -> &str {
        match employment_type {
            EmploymentType::FullTime => &self.full_time,
            EmploymentType::PartTime => &self.part_time,
        }
    }

    /// Labels for every employment type, in [`EmploymentType::ALL`] order.
    pub fn options(&self) -> Vec<String> {
        EmploymentType::ALL
            .iter()
            .map(|employment_type| self.label(*employment_type).to_string())
            .collect()
    }
}

/// The complete shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Title of the application window.
    pub title: String,
    /// Employment type labels.
    pub labels: EmploymentLabels,
    /// A `tracing` filter directive such as `info` or `payroll_roster=debug`.
    pub log_filter: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "Employee Payroll System".to_string(),
            labels: EmploymentLabels::default(),
            log_filter: None,
        }
    }
}

impl ShellConfig {
    /// The log filter to use when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or("info")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.title, "Employee Payroll System");
        assert_eq!(config.labels.options(), vec!["Full-Time", "Part-Time"]);
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: ShellConfig = serde_yaml::from_str("title: Staff Pay\n").unwrap();
        assert_eq!(config.title, "Staff Pay");
        assert_eq!(config.labels, EmploymentLabels::default());
        assert_eq!(config.log_filter, None);
    }

    #[test]
    fn test_label_overrides() {
        let yaml = "labels:\n  part_time: Hourly\nlog_filter: debug\n";
        let config: ShellConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.labels.label(EmploymentType::FullTime), "Full-Time");
        assert_eq!(config.labels.label(EmploymentType::PartTime), "Hourly");
        assert_eq!(config.log_filter(), "debug");
    }
}
