//! Check policy configuration
//!
//! This module provides the CheckPolicy struct that encapsulates
//! all options deciding which modules get reported.

use crate::cli::CliArgs;

/// Policy deciding which modules are checked and reported
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckPolicy {
    /// Report modules without updates for the last 6 months
    pub check_old: bool,
    /// Check indirect modules too
    pub check_indirect: bool,
    /// Path prefixes of the modules to ignore
    pub ignored: Vec<String>,
}

impl CheckPolicy {
    /// Create a new CheckPolicy with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the policy from the CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        Self::new()
            .with_old(args.old)
            .with_indirect(args.indirect)
            .with_ignored(args.ignored_prefixes())
    }

    /// Set whether stale modules are reported
    pub fn with_old(mut self, check_old: bool) -> Self {
        self.check_old = check_old;
        self
    }

    /// Set whether indirect modules are checked
    pub fn with_indirect(mut self, check_indirect: bool) -> Self {
        self.check_indirect = check_indirect;
        self
    }

    /// Set the ignored path prefixes
    pub fn with_ignored(mut self, ignored: Vec<String>) -> Self {
        self.ignored = ignored;
        self
    }

    /// Check if a module path is ignored
    pub fn is_ignored(&self, path: &str) -> bool {
        self.ignored.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }
}
