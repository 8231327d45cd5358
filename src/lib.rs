//! check-deps - Go module update checker library
//!
//! This library lists the modules of a Go project with `go list`, decides
//! which ones are outdated, replaced or stale, and renders them as tables:
//! - exec: running external commands
//! - golist: decoding the module listing
//! - check: classifying modules
//! - output: rendering the report

pub mod app;
pub mod check;
pub mod cli;
pub mod domain;
pub mod error;
pub mod exec;
pub mod golist;
pub mod logging;
pub mod output;
