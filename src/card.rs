//! Card labels and label utilities.
//!
//! A card is only ever a label such as `"Ace of Spades"`; nothing here parses
//! a label back into a rank or a suit.

use alloc::format;
use alloc::string::{String, ToString};

/// Labels of the default deck, in dealing order.
pub const DEFAULT_LABELS: [&str; 4] = [
    "Ace of Spades",
    "Two of Hearts",
    "Three of Diamonds",
    "Two of Spades",
];

/// Rank words of a standard 52-card deck, lowest first (Ace low).
pub const STANDARD_RANKS: [&str; 13] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
    "Queen", "King",
];

/// Suit words of a standard 52-card deck.
pub const STANDARD_SUITS: [&str; 4] = ["Spades", "Hearts", "Diamonds", "Clubs"];

/// Number of cards in a deck built from [`STANDARD_RANKS`] and [`STANDARD_SUITS`].
pub const STANDARD_DECK_SIZE: usize = STANDARD_RANKS.len() * STANDARD_SUITS.len();

/// Composes the label for a rank and a suit, e.g. `"Ace of Spades"`.
#[must_use]
pub fn label(rank: &str, suit: &str) -> String {
    format!("{rank} of {suit}")
}

/// Returns a single fresh card label.
#[must_use]
pub fn new_card() -> String {
    "Five of Diamonds".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_joins_rank_and_suit() {
        assert_eq!(label("Queen", "Hearts"), "Queen of Hearts");
        assert_eq!(label("", ""), " of ");
    }

    #[test]
    fn standard_deck_size_is_52() {
        assert_eq!(STANDARD_DECK_SIZE, 52);
    }
}
