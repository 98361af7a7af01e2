//! Adding and removing cards.

use crate::console::Console;
use crate::error::Result;
use crate::models::{Card, Collection};
use std::io::{BufRead, Write};

/// Asks for a term and a definition and adds the pair if both are new.
pub fn add<R: BufRead, W: Write>(
    cards: &mut Collection,
    console: &mut Console<R, W>,
) -> Result<()> {
    let term = console.ask(cards, "The card:")?;
    if cards.find_index_by_term(&term).is_some() {
        return console.report(cards, &format!("The card \"{term}\" already exists."));
    }

    let definition = console.ask(cards, "The definition of the card:")?;
    if cards.contains_definition(&definition) {
        return console.report(
            cards,
            &format!("The definition \"{definition}\" already exists."),
        );
    }

    let message = format!("The pair (\"{term}\":\"{definition}\") has been added.");
    cards.add(Card::new(term, definition));
    console.report(cards, &message)
}

/// Asks for a term and removes the first card with that term.
pub fn remove<R: BufRead, W: Write>(
    cards: &mut Collection,
    console: &mut Console<R, W>,
) -> Result<()> {
    let term = console.ask(cards, "Which card?")?;
    match cards.cards().iter().position(|card| card.has_term(&term)) {
        Some(index) => {
            cards.remove_at(index);
            console.report(cards, "The card has been removed.")
        }
        None => console.report(
            cards,
            &format!("Can't remove \"{term}\": there is no such card."),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_add(cards: &mut Collection, input: &str) -> String {
        let mut console = Console::new(input.as_bytes(), Vec::new());
        add(cards, &mut console).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    fn run_remove(cards: &mut Collection, input: &str) -> String {
        let mut console = Console::new(input.as_bytes(), Vec::new());
        remove(cards, &mut console).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_add_new_pair() {
        let mut cards = Collection::new();
        let output = run_add(&mut cards, "Hello\nHi\n");

        assert!(output.contains("The pair (\"Hello\":\"Hi\") has been added."));
        assert_eq!(cards.cards(), [Card::new("Hello", "Hi")]);
    }

    #[test]
    fn test_add_duplicate_term_is_rejected() {
        let mut cards = Collection::new();
        run_add(&mut cards, "Hello\nHi\n");
        let output = run_add(&mut cards, "HELLO\nX\n");

        assert!(output.contains("The card \"HELLO\" already exists."));
        assert!(!output.contains("The definition of the card:"));
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn test_add_duplicate_definition_is_rejected() {
        let mut cards = Collection::new();
        run_add(&mut cards, "Hello\nHi\n");
        let output = run_add(&mut cards, "Greeting\nhI\n");

        assert!(output.contains("The definition \"hI\" already exists."));
        assert_eq!(cards.len(), 1);
        assert!(cards.find_index_by_term("Greeting").is_none());
    }

    #[test]
    fn test_add_records_transcript() {
        let mut cards = Collection::new();
        run_add(&mut cards, "dom\nhouse\n");

        assert_eq!(
            cards.transcript(),
            [
                "The card:",
                "dom",
                "The definition of the card:",
                "house",
                "The pair (\"dom\":\"house\") has been added.\n",
            ]
        );
    }

    #[test]
    fn test_remove_existing_card() {
        let mut cards = Collection::new();
        cards.add(Card::new("dom", "house"));
        cards.add(Card::new("kot", "cat"));

        let output = run_remove(&mut cards, "DOM\n");

        assert!(output.contains("The card has been removed."));
        assert_eq!(cards.cards(), [Card::new("kot", "cat")]);
    }

    #[test]
    fn test_remove_missing_card() {
        let mut cards = Collection::new();
        cards.add(Card::new("dom", "house"));

        let output = run_remove(&mut cards, "pies\n");

        assert!(output.contains("Can't remove \"pies\": there is no such card."));
        assert_eq!(cards.len(), 1);
    }
}
