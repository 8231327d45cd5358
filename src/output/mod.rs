//! Report output for classification results
//!
//! This module provides:
//! - One table per non-empty bucket (updated, replaced, old)
//! - A single blank line between consecutive tables

mod table;

pub use table::{Align, Table};

use crate::check::months_since;
use crate::domain::{Module, Results};
use chrono::{DateTime, Utc};
use std::io::Write;

/// Formatter writing the report tables
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    /// Whether to use colors
    color: bool,
    /// Reference time for the "Last update" column, defaults to now
    now: Option<DateTime<Utc>>,
}

impl ReportFormatter {
    /// Create a new formatter without colors
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new formatter with color option
    pub fn with_color(color: bool) -> Self {
        Self { color, now: None }
    }

    /// Use a fixed reference time (for testing)
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Write every non-empty bucket as a table
    pub fn format(&self, results: &Results<'_>, writer: &mut dyn Write) -> std::io::Result<()> {
        let now = self.now.unwrap_or_else(Utc::now);
        let tables = [
            self.updated_table(&results.updated),
            self.replaced_table(&results.replaced),
            self.old_table(&results.old, now),
        ];

        let mut need_spacing = false;
        for table in tables.iter().filter(|t| !t.is_empty()) {
            if need_spacing {
                writeln!(writer)?;
            }
            table.render(writer)?;
            need_spacing = true;
        }
        Ok(())
    }

    fn updated_table(&self, modules: &[&Module]) -> Table {
        let mut table = Table::new(["Module", "Current Version", "New Version", "Indirect"])
            .with_alignment(&[Align::Left, Align::Center, Align::Center, Align::Center])
            .with_color(self.color);
        for module in modules {
            let new_version = module
                .update
                .as_ref()
                .map(|u| u.version.as_str())
                .unwrap_or_default();
            table.push_row([
                module.path.as_str(),
                module.version.as_str(),
                new_version,
                bool_label(module.indirect),
            ]);
        }
        table
    }

    fn replaced_table(&self, modules: &[&Module]) -> Table {
        let mut table = Table::new(["Module", "Replaced By", "Indirect"])
            .with_alignment(&[Align::Left, Align::Left, Align::Center])
            .with_color(self.color);
        for module in modules {
            let replaced_by = module
                .replace
                .as_ref()
                .map(|r| r.path.as_str())
                .unwrap_or_default();
            table.push_row([
                module.path.as_str(),
                replaced_by,
                bool_label(module.indirect),
            ]);
        }
        table
    }

    fn old_table(&self, modules: &[&Module], now: DateTime<Utc>) -> Table {
        let mut table = Table::new(["Module", "Last update", "Indirect"])
            .with_alignment(&[Align::Left, Align::Center, Align::Center])
            .with_color(self.color);
        for module in modules {
            table.push_row([
                module.path.clone(),
                last_update(module, now),
                bool_label(module.indirect).to_string(),
            ]);
        }
        table
    }
}

/// Render the results against the current time, without colors
pub fn render(results: &Results<'_>, writer: &mut dyn Write) -> std::io::Result<()> {
    ReportFormatter::new().format(results, writer)
}

/// Render the results against a fixed time, without colors
pub fn render_at(
    results: &Results<'_>,
    now: DateTime<Utc>,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    ReportFormatter::new().at(now).format(results, writer)
}

fn bool_label(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// `"<N> months ago (<YYYY/MM/DD>)"`, empty when the time is unknown
fn last_update(module: &Module, now: DateTime<Utc>) -> String {
    match module.time {
        Some(time) => format!(
            "{} months ago ({})",
            months_since(time, now),
            time.format("%Y/%m/%d")
        ),
        None => String::new(),
    }
}
