//! Report writer: the program's only output surface.
//!
//! The report is a fixed sequence of lines, one per catalog entry, written
//! to any `io::Write` sink. `render_report` produces the same text in
//! memory for golden comparisons.

use std::io::{self, Write};

use thiserror::Error;

use crate::problems::catalog;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Write every catalog line to `out`, then flush.
pub fn write_report<W: Write>(out: &mut W) -> Result<(), ReportError> {
    for problem in catalog() {
        writeln!(out, "{}", problem)?;
    }
    out.flush()?;
    Ok(())
}

/// The full report as a string, one trailing newline per line.
pub fn render_report() -> String {
    let mut text = String::new();
    for problem in catalog() {
        text.push_str(&problem.to_string());
        text.push('\n');
    }
    text
}
