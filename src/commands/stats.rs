//! Mistake statistics: hardest cards and reset.

use crate::console::Console;
use crate::error::Result;
use crate::models::{Card, Collection};
use std::io::{BufRead, Write};

/// Returns the highest mistake count and every card that has it, in list
/// order, or `None` when no card has any mistakes.
pub fn hardest_cards(cards: &[Card]) -> Option<(u32, Vec<&Card>)> {
    let max = cards.iter().map(Card::mistakes).max().filter(|&max| max > 0)?;
    let hardest = cards.iter().filter(|card| card.mistakes() == max).collect();
    Some((max, hardest))
}

/// Reports the card or cards answered wrongly most often.
pub fn hardest_card<R: BufRead, W: Write>(
    cards: &mut Collection,
    console: &mut Console<R, W>,
) -> Result<()> {
    let message = match hardest_cards(cards.cards()) {
        None => "There are no cards with errors.".to_string(),
        Some((mistakes, hardest)) if hardest.len() == 1 => format!(
            "The hardest card is \"{}\". You have {mistakes} errors answering it.",
            hardest[0].term()
        ),
        Some((mistakes, hardest)) => {
            let terms: Vec<String> = hardest
                .iter()
                .map(|card| format!("\"{}\"", card.term()))
                .collect();
            format!(
                "The hardest cards are {}. You have {mistakes} errors answering them.",
                terms.join(", ")
            )
        }
    };
    console.report(cards, &message)
}

/// Sets every mistake counter back to zero.
pub fn reset_stats<R: BufRead, W: Write>(
    cards: &mut Collection,
    console: &mut Console<R, W>,
) -> Result<()> {
    cards.reset_mistakes();
    console.report(cards, "Card statistics have been reset.")
}
