//! Error types for the payroll roster.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every way a flow or the startup configuration can fail.

use thiserror::Error;

use crate::models::EmployeeId;

/// The main error type for the payroll roster.
///
/// Flow errors (`Format`, `Validation`, `DuplicateId`, `NotFound`,
/// `Cancelled`) are recovered by the shell: the flow aborts and the roster
/// stays as it was. Configuration errors only occur at startup.
///
/// # Example
///
/// ```
/// use payroll_roster::error::PayrollError;
///
/// let error = PayrollError::DuplicateId { id: 7 };
/// assert_eq!(error.to_string(), "Employee with this ID already exists.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// Text was entered where a number was expected.
    #[error("Please enter valid numeric input.")]
    Format {
        /// The field being parsed.
        field: String,
        /// The raw text that failed to parse.
        input: String,
    },

    /// A value parsed but is out of range (blank name, negative amount).
    #[error("{message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An employee with the requested id is already on the roster.
    #[error("Employee with this ID already exists.")]
    DuplicateId {
        /// The id that is already taken.
        id: EmployeeId,
    },

    /// No employee with the requested id is on the roster.
    #[error("Employee ID not found.")]
    NotFound {
        /// The id that was not found.
        id: EmployeeId,
    },

    /// The user dismissed a prompt.
    #[error("Prompt cancelled: {prompt}")]
    Cancelled {
        /// The title of the dismissed prompt.
        prompt: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl PayrollError {
    /// Builds a validation error for `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Builds a format error for `field` carrying the rejected input.
    pub fn format(field: impl Into<String>, input: impl Into<String>) -> Self {
        Self::Format {
            field: field.into(),
            input: input.into(),
        }
    }

    /// Returns true if the error came from the user dismissing a prompt.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Short machine-readable code, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Format { .. } => "FORMAT_ERROR",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::DuplicateId { .. } => "DUPLICATE_ID",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Cancelled { .. } => "CANCELLED",
            Self::ConfigNotFound { .. } | Self::ConfigParseError { .. } => "CONFIG_ERROR",
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
