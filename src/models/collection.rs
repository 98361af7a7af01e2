//! Collection is the ordered list of cards of one session together with
//! the transcript of everything shown and typed during that session.
use super::Card;

#[derive(Clone, Debug, Default)]
pub struct Collection {
    cards: Vec<Card>,
    transcript: Vec<String>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Appends a card. Duplicate checks are up to the caller.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the card at `index`, or returns `None` if the index is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Overwrites the card at `index` keeping its position and returns the old one.
    pub fn replace_at(&mut self, index: usize, card: Card) -> Option<Card> {
        self.cards
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, card))
    }

    /// Case-insensitive lookup by term.
    ///
    /// Scans the whole list and returns the index of the last match, so when
    /// duplicates exist the later card wins.
    pub fn find_index_by_term(&self, term: &str) -> Option<usize> {
        let mut found = None;
        for (index, card) in self.cards.iter().enumerate() {
            if card.has_term(term) {
                found = Some(index);
            }
        }
        found
    }

    pub fn contains_definition(&self, definition: &str) -> bool {
        self.cards.iter().any(|card| card.has_definition(definition))
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Merges cards read from a file: a card whose term is already known
    /// replaces the existing one in place (mistakes included), any other
    /// card is appended. Returns how many cards were read, not how many changed.
    pub fn merge_imported(&mut self, imported: Vec<Card>) -> usize {
        let count = imported.len();
        for card in imported {
            match self.find_index_by_term(card.term()) {
                Some(index) => {
                    self.replace_at(index, card);
                }
                None => self.add(card),
            }
        }
        count
    }

    pub fn reset_mistakes(&mut self) {
        for card in &mut self.cards {
            card.reset_mistakes();
        }
    }

    pub fn append_log_line(&mut self, line: impl Into<String>) {
        self.transcript.push(line.into());
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}
