//! Box-drawing table rendering
//!
//! Column widths are measured in chars on the plain text, so styling the
//! header never shifts the borders.

use colored::Colorize;
use std::io::Write;

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// A table with a header row and any number of body rows
#[derive(Debug, Clone)]
pub struct Table {
    header: Vec<String>,
    alignment: Vec<Align>,
    rows: Vec<Vec<String>>,
    color: bool,
}

impl Table {
    /// Create a new table with the given header
    pub fn new<S: Into<String>>(header: impl IntoIterator<Item = S>) -> Self {
        let header: Vec<String> = header.into_iter().map(Into::into).collect();
        let alignment = vec![Align::Left; header.len()];
        Self {
            header,
            alignment,
            rows: Vec::new(),
            color: false,
        }
    }

    /// Set the alignment of the body cells, column by column
    pub fn with_alignment(mut self, alignment: &[Align]) -> Self {
        for (slot, align) in self.alignment.iter_mut().zip(alignment) {
            *slot = *align;
        }
        self
    }

    /// Render the header in bold
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Append a row. Missing cells render empty, extra cells are dropped.
    pub fn push_row<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        let mut row: Vec<String> = row.into_iter().map(Into::into).collect();
        row.resize(self.header.len(), String::new());
        self.rows.push(row);
    }

    /// Returns true if the table has no body rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| width(h)).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(width(cell));
            }
        }
        widths
    }

    /// Write the table, ending with a newline
    pub fn render(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        let widths = self.widths();

        write_border(writer, &widths, '┌', '┬', '┐')?;

        write!(writer, "│")?;
        for (header, w) in self.header.iter().zip(&widths) {
            let cell = pad(header, *w, Align::Center);
            if self.color {
                write!(writer, " {} │", cell.bold())?;
            } else {
                write!(writer, " {} │", cell)?;
            }
        }
        writeln!(writer)?;

        write_border(writer, &widths, '├', '┼', '┤')?;

        for row in &self.rows {
            write!(writer, "│")?;
            for ((cell, w), align) in row.iter().zip(&widths).zip(&self.alignment) {
                write!(writer, " {} │", pad(cell, *w, *align))?;
            }
            writeln!(writer)?;
        }

        write_border(writer, &widths, '└', '┴', '┘')
    }
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, w: usize, align: Align) -> String {
    let fill = w.saturating_sub(width(s));
    match align {
        Align::Left => format!("{}{}", s, " ".repeat(fill)),
        Align::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), s, " ".repeat(fill - left))
        }
    }
}

fn write_border(
    writer: &mut dyn Write,
    widths: &[usize],
    left: char,
    middle: char,
    right: char,
) -> std::io::Result<()> {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    writeln!(
        writer,
        "{}{}{}",
        left,
        segments.join(&middle.to_string()),
        right
    )
}
