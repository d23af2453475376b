//! Application context for the payroll shell.
//!
//! This module defines the state every flow operates on. One context is
//! created at startup and passed explicitly to each flow.

use crate::config::ShellConfig;
use crate::roster::Roster;

/// Configuration plus the single roster owned by the running application.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    config: ShellConfig,
    roster: Roster,
}

impl AppContext {
    /// Creates a context with an empty roster.
    pub fn new(config: ShellConfig) -> Self {
        Self::with_roster(config, Roster::new())
    }

    /// Creates a context around an existing roster.
    pub fn with_roster(config: ShellConfig, roster: Roster) -> Self {
        Self { config, roster }
    }

    /// Returns the shell configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Returns the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub(crate) fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// Consumes the context and returns the roster.
    pub fn into_roster(self) -> Roster {
        self.roster
    }
}
