//! Quiz rounds over randomly drawn cards.

use crate::console::Console;
use crate::error::Result;
use crate::models::Collection;
use crate::models::card::same_text;
use rand::Rng;
use std::io::{BufRead, Write};

/// Parses the number of rounds; only positive integers are accepted.
fn parse_rounds(input: &str) -> Option<u32> {
    input.parse::<u32>().ok().filter(|&rounds| rounds > 0)
}

/// Asks how many rounds to play, then quizzes on randomly drawn cards.
///
/// Cards are drawn with replacement. A wrong answer increments the drawn
/// card's mistake counter and names any other card the answer belongs to.
pub fn ask<R: BufRead, W: Write, G: Rng>(
    cards: &mut Collection,
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<()> {
    let input = console.ask(cards, "How many times to ask?")?;
    let Some(rounds) = parse_rounds(&input) else {
        return console.report(cards, "Wrong input.");
    };
    if cards.is_empty() {
        return console.report(cards, "There are no cards.");
    }

    for _ in 0..rounds {
        let index = rng.random_range(0..cards.len());
        let Some(card) = cards.get(index) else {
            break;
        };
        let (term, definition) = (card.term().to_string(), card.definition().to_string());

        let answer = console.ask(cards, &format!("Print the definition of \"{term}\":"))?;
        if same_text(&answer, &definition) {
            console.say(cards, "Correct!")?;
            continue;
        }

        if let Some(card) = cards.get_mut(index) {
            card.add_mistake();
        }
        let mut message = format!("Wrong. The right answer is \"{definition}\"");
        for other in cards.cards().iter().filter(|c| c.has_definition(&answer)) {
            message.push_str(&format!(
                ", but your definition is correct for \"{}\" card",
                other.term()
            ));
        }
        message.push('.');
        console.say(cards, &message)?;
    }
    console.blank_line()
}
