//! Saving the session transcript to a plain text file.

use crate::error::Result;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends every transcript line, one per line, to the file at `path`.
/// The file is created if missing and never truncated.
pub fn append_transcript(lines: &[String], path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    tracing::debug!("appended {} transcript lines to {}", lines.len(), path.display());
    Ok(())
}
