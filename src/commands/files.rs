//! Import, export and log handlers.

use crate::console::Console;
use crate::error::{FlashcardError, Result};
use crate::export::{append_transcript, export_json_to_path, import_json};
use crate::models::Collection;
use std::io::{BufRead, Write};
use std::path::Path;

const FILE_PROMPT: &str = "File name:";

/// Asks for a file name and merges the cards stored there.
pub fn import<R: BufRead, W: Write>(
    cards: &mut Collection,
    console: &mut Console<R, W>,
) -> Result<()> {
    let path = console.ask(cards, FILE_PROMPT)?;
    import_from(cards, console, Path::new(&path))
}

/// Merges the cards stored at `path` without prompting.
pub fn import_from<R: BufRead, W: Write>(
    cards: &mut Collection,
    console: &mut Console<R, W>,
    path: &Path,
) -> Result<()> {
    match import_json(path) {
        Ok(imported) => {
            let loaded = cards.merge_imported(imported);
            tracing::info!("imported {loaded} cards from {}", path.display());
            console.report(cards, &format!("{loaded} cards have been loaded."))
        }
        Err(FlashcardError::Json(e)) => {
            tracing::warn!("malformed card file {}: {e}", path.display());
            console.report(
                cards,
                &format!(
                    "File \"{}\" does not contain a valid card list.",
                    path.display()
                ),
            )
        }
        Err(e) => {
            tracing::debug!("import from {} failed: {e}", path.display());
            console.report(cards, "File not found.")
        }
    }
}

/// Asks for a file name and writes all cards there.
pub fn export<R: BufRead, W: Write>(
    cards: &mut Collection,
    console: &mut Console<R, W>,
) -> Result<()> {
    let path = console.ask(cards, FILE_PROMPT)?;
    export_to(cards, console, Path::new(&path))
}

/// Writes all cards to `path` without prompting.
pub fn export_to<R: BufRead, W: Write>(
    cards: &mut Collection,
    console: &mut Console<R, W>,
    path: &Path,
) -> Result<()> {
    match export_json_to_path(cards.cards(), path) {
        Ok(()) => {
            let saved = cards.len();
            tracing::info!("exported {saved} cards to {}", path.display());
            console.report(cards, &format!("{saved} cards have been saved."))
        }
        Err(e) => {
            tracing::warn!("export to {} failed: {e}", path.display());
            console.report(cards, "Incorrect file name.")
        }
    }
}

/// Asks for a file name and appends the transcript collected so far.
pub fn save_log<R: BufRead, W: Write>(
    cards: &mut Collection,
    console: &mut Console<R, W>,
) -> Result<()> {
    let path = console.ask(cards, FILE_PROMPT)?;
    match append_transcript(cards.transcript(), Path::new(&path)) {
        Ok(()) => console.report(cards, "The log has been saved."),
        Err(e) => {
            tracing::warn!("saving log to {path:?} failed: {e}");
            console.report(cards, "Incorrect file name.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Card;
    use std::fs;
    use tempfile::TempDir;

    fn output_of<R: BufRead>(console: Console<R, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_export_then_import_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cards.json");
        let path_line = format!("{}\n", path.display());

        let mut original = Collection::new();
        original.add(Card::with_mistakes("dom", "house", 2));
        original.add(Card::new("kot", "cat"));
        original.add(Card::with_mistakes("pies", "dog", 5));

        let mut console = Console::new(path_line.as_bytes(), Vec::new());
        export(&mut original, &mut console).unwrap();
        assert!(output_of(console).contains("3 cards have been saved."));

        let mut restored = Collection::new();
        let mut console = Console::new(path_line.as_bytes(), Vec::new());
        import(&mut restored, &mut console).unwrap();
        assert!(output_of(console).contains("3 cards have been loaded."));

        assert_eq!(original.cards(), restored.cards());
    }

    #[test]
    fn test_import_replaces_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cards.json");
        fs::write(
            &path,
            r#"[{"term":"KOT","definition":"kitty","mistakes":7},
                {"term":"ryba","definition":"fish","mistakes":0}]"#,
        )
        .unwrap();

        let mut cards = Collection::new();
        cards.add(Card::new("dom", "house"));
        let mut kot = Card::new("kot", "cat");
        kot.add_mistake();
        cards.add(kot);
        cards.add(Card::new("pies", "dog"));

        let mut console = Console::new("".as_bytes(), Vec::new());
        import_from(&mut cards, &mut console, &path).unwrap();

        assert!(output_of(console).contains("2 cards have been loaded."));
        let terms: Vec<&str> = cards.cards().iter().map(Card::term).collect();
        assert_eq!(terms, ["dom", "KOT", "pies", "ryba"]);
        assert_eq!(cards.cards()[1].mistakes(), 7);
    }

    #[test]
    fn test_import_missing_file() {
        let dir = TempDir::new().unwrap();
        let mut cards = Collection::new();
        let mut console = Console::new("".as_bytes(), Vec::new());

        import_from(&mut cards, &mut console, &dir.path().join("nope.json")).unwrap();

        assert!(output_of(console).contains("File not found."));
        assert!(cards.is_empty());
    }

    #[test]
    fn test_import_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let mut cards = Collection::new();
        cards.add(Card::new("dom", "house"));
        let mut console = Console::new("".as_bytes(), Vec::new());

        import_from(&mut cards, &mut console, &path).unwrap();

        assert!(output_of(console).contains("does not contain a valid card list."));
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn test_export_to_bad_path() {
        let dir = TempDir::new().unwrap();
        let mut cards = Collection::new();
        let mut console = Console::new("".as_bytes(), Vec::new());

        export_to(&mut cards, &mut console, dir.path()).unwrap();

        assert!(output_of(console).contains("Incorrect file name."));
    }

    #[test]
    fn test_save_log_appends_transcript() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.log");
        fs::write(&path, "earlier\n").unwrap();

        let mut cards = Collection::new();
        cards.append_log_line("menu");
        let input = format!("{}\n", path.display());
        let mut console = Console::new(input.as_bytes(), Vec::new());

        save_log(&mut cards, &mut console).unwrap();

        assert!(output_of(console).contains("The log has been saved."));
        let expected = format!("earlier\nmenu\nFile name:\n{}\n", path.display());
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn test_save_log_bad_path() {
        let dir = TempDir::new().unwrap();
        let input = format!("{}\n", dir.path().join("no/such/dir.log").display());
        let mut cards = Collection::new();
        let mut console = Console::new(input.as_bytes(), Vec::new());

        save_log(&mut cards, &mut console).unwrap();

        assert!(output_of(console).contains("Incorrect file name."));
    }
}
