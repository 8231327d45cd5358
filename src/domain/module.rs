//! Go module records as reported by `go list -m -json`

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::fmt;

/// A single Go module
///
/// Field names follow the JSON emitted by `go list -m -json`, see
/// `go help list` for their meaning. `Replace` and `Update` are owned
/// snapshots, not links into the module list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Module {
    /// Module path
    pub path: String,
    /// Module version, empty for the main module
    pub version: String,
    /// Available module versions (with `-versions`)
    pub versions: Vec<String>,
    /// Replaced by this module
    pub replace: Option<Box<Module>>,
    /// Time the version was created
    pub time: Option<DateTime<FixedOffset>>,
    /// Available update, if any (with `-u`)
    pub update: Option<Box<Module>>,
    /// Is this the main module?
    pub main: bool,
    /// Is this module only an indirect dependency of the main module?
    pub indirect: bool,
    /// Directory holding the files of this module, if any
    pub dir: Option<String>,
    /// Path to the go.mod file of this module, if any
    pub go_mod: Option<String>,
    /// Error loading the module
    pub error: Option<ModuleError>,
}

/// Error that occurred while loading a module's metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModuleError {
    #[serde(rename = "Err")]
    pub err: String,
}

impl Module {
    /// Creates a new module with only a path
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Sets the version (builder pattern)
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the publication time (builder pattern)
    pub fn with_time(mut self, time: DateTime<FixedOffset>) -> Self {
        self.time = Some(time);
        self
    }

    /// Sets the module replacing this one (builder pattern)
    pub fn with_replace(mut self, replace: Module) -> Self {
        self.replace = Some(Box::new(replace));
        self
    }

    /// Sets the available update (builder pattern)
    pub fn with_update(mut self, update: Module) -> Self {
        self.update = Some(Box::new(update));
        self
    }

    /// Marks the module as an indirect dependency (builder pattern)
    pub fn indirect(mut self) -> Self {
        self.indirect = true;
        self
    }

    /// Marks the module as the main module (builder pattern)
    pub fn main(mut self) -> Self {
        self.main = true;
        self
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}@{}", self.path, self.version)
        }
    }
}
