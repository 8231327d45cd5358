//! Core domain models for check-deps
//!
//! This module contains the fundamental types used throughout the application:
//! - Module records decoded from `go list`
//! - Classification results

mod module;
mod results;

pub use module::{Module, ModuleError};
pub use results::Results;
