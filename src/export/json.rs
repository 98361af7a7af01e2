//! JSON import/export module for card collections.
//! Cards are stored as an array of `{term, definition, mistakes}` objects.

use crate::error::{FlashcardError, Result};
use crate::models::Card;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Serializes cards as a JSON array indented by a single space.
pub fn cards_to_json(cards: &[Card]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b" ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    cards.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Exports cards to a JSON file at the specified path, overwriting it.
/// The cards are written to a temporary file next to `path` and moved into
/// place afterwards, so a failed export leaves any previous file untouched.
pub fn export_json_to_path(cards: &[Card], path: &Path) -> Result<()> {
    let json_string = cards_to_json(cards)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(json_string.as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;
    tracing::debug!("wrote {} cards to {}", cards.len(), path.display());
    Ok(())
}

/// Imports cards from a JSON file.
/// Returns `FileNotFound` if the path does not exist and `Json` if it does
/// not hold an array of cards.
pub fn import_json(path: &Path) -> Result<Vec<Card>> {
    if !fs::metadata(path).is_ok_and(|meta| meta.is_file()) {
        return Err(FlashcardError::FileNotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let cards: Vec<Card> = serde_json::from_reader(BufReader::new(file))?;
    tracing::debug!("read {} cards from {}", cards.len(), path.display());
    Ok(cards)
}
