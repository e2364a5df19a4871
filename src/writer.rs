//! CSV emission with the fixed column contract.

use crate::join::OutputRow;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Output column order. Downstream spreadsheets key on these exact names and
/// positions; change them only together with every consumer.
pub const OUTPUT_HEADER: [&str; 25] = [
    "Session ID",
    "Session Start Date",
    "Session End Date",
    "Session Duration",
    "Session Location",
    "Session Talent",
    "Session QA",
    "Session Day",
    "Film ID",
    "Film International Title",
    "Film Original Title",
    "Film Year",
    "Film Duration",
    "Film Directors",
    "Director Biography",
    "Film Synopsis (en)",
    "Film Credits (en)",
    "Film Genres",
    "Film Sections",
    "Film Categories",
    "Film Awards",
    "Film Types",
    "Film Languages",
    "Film Countries",
    "Film URL",
];

/// Write header + rows to `path`, overwriting any existing file. An
/// unwritable output path fails the whole run.
pub fn write_rows(path: &Path, rows: &[OutputRow]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating output {}", path.display()))?;
    let mut wtr = csv::Writer::from_writer(BufWriter::new(file));
    wtr.write_record(OUTPUT_HEADER)
        .context("writing CSV header")?;
    for row in rows {
        wtr.write_record(row.record())
            .with_context(|| format!("writing row for session {}", row.session_id))?;
    }
    wtr.flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}
