//! The deck type and its in-memory operations.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{self, DEFAULT_LABELS, STANDARD_RANKS, STANDARD_SUITS};
use crate::error::{DealError, FormatError};
use crate::options::DeckOptions;

/// An ordered sequence of card labels.
///
/// Labels are free-form text. Duplicates and empty labels are allowed; order
/// is the only structure a deck has.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: Vec<String>,
}

impl Deck {
    /// Creates the default four-card deck.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), 4);
    /// assert_eq!(deck.first(), Some("Ace of Spades"));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_labels(DEFAULT_LABELS)
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a deck from any sequence of labels, keeping their order.
    #[must_use]
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cards: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a deck with one `"{rank} of {suit}"` card for every suit and
    /// rank, suit-major.
    #[must_use]
    pub fn from_ranks_and_suits(ranks: &[&str], suits: &[&str]) -> Self {
        let mut cards = Vec::with_capacity(ranks.len() * suits.len());
        for suit in suits {
            for rank in ranks {
                cards.push(card::label(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates an unshuffled 52-card deck.
    #[must_use]
    pub fn full() -> Self {
        Self::from_ranks_and_suits(&STANDARD_RANKS, &STANDARD_SUITS)
    }

    /// Appends a card to the bottom of the deck.
    pub fn push(&mut self, label: impl Into<String>) {
        self.cards.push(label.into());
    }

    /// Returns the number of cards.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the label at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cards.get(index).map(String::as_str)
    }

    /// Returns the top card.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.get(0)
    }

    /// Returns all labels in order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.cards
    }

    /// Consumes the deck and returns its labels.
    #[must_use]
    pub fn into_labels(self) -> Vec<String> {
        self.cards
    }

    /// Iterates over the labels in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(String::as_str)
    }

    /// Returns the printable lines of the deck, one per card, numbered from 1.
    ///
    /// Lines are produced lazily.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let deck = Deck::from_labels(["Ace of Spades"]);
    /// let lines: Vec<String> = deck.lines().collect();
    /// assert_eq!(lines, ["Card 1: Ace of Spades"]);
    /// ```
    pub fn lines(&self) -> impl Iterator<Item = String> {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, label)| format!("Card {}: {label}", index + 1))
    }

    /// Splits the deck into a hand of the first `hand_size` cards and the
    /// remaining deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::OutOfRange`] if `hand_size` exceeds the number of
    /// cards.
    pub fn deal(mut self, hand_size: usize) -> Result<(Self, Self), DealError> {
        let len = self.cards.len();
        if hand_size > len {
            return Err(DealError::OutOfRange { hand_size, len });
        }

        let remaining = self.cards.split_off(hand_size);
        tracing::debug!(hand = hand_size, remaining = remaining.len(), "dealt hand");

        Ok((self, Self { cards: remaining }))
    }

    /// Shuffles the deck in place with a generator seeded from `seed`.
    ///
    /// The same seed always produces the same order.
    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
        tracing::debug!(seed, cards = self.cards.len(), "shuffled deck");
    }

    /// Shuffles the deck in place with the given generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Serializes the deck with the default options.
    ///
    /// Labels are joined with `,` and nothing is escaped.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_text_with(&DeckOptions::default())
    }

    /// Serializes the deck by joining its labels with `options.delimiter`.
    ///
    /// Nothing is escaped: a label containing the delimiter will not survive
    /// [`Deck::from_text_with`]. Use [`Deck::check_writable`] to detect that.
    #[must_use]
    pub fn to_text_with(&self, options: &DeckOptions) -> String {
        let mut buf = [0u8; 4];
        let delimiter = options.delimiter.encode_utf8(&mut buf);
        self.cards.join(&*delimiter)
    }

    /// Parses a deck with the default options.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with(text, &DeckOptions::default())
    }

    /// Parses a deck by splitting `text` on `options.delimiter`.
    ///
    /// Empty text yields an empty deck.
    #[must_use]
    pub fn from_text_with(text: &str, options: &DeckOptions) -> Self {
        let text = if options.trim_trailing_newline {
            text.strip_suffix('\n')
                .map_or(text, |rest| rest.strip_suffix('\r').unwrap_or(rest))
        } else {
            text
        };

        if text.is_empty() {
            return Self::empty();
        }

        text.split(options.delimiter).collect()
    }

    /// Checks that no label contains `delimiter`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::ContainsDelimiter`] for the first offending card.
    pub fn check_delimiter(&self, delimiter: char) -> Result<(), FormatError> {
        match self
            .cards
            .iter()
            .enumerate()
            .find(|(_, label)| label.contains(delimiter))
        {
            Some((index, label)) => Err(FormatError::ContainsDelimiter {
                index,
                label: label.clone(),
                delimiter,
            }),
            None => Ok(()),
        }
    }

    /// Checks that the deck loads back unchanged after being written with
    /// `options`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::ContainsDelimiter`] if a label contains the
    /// delimiter, and [`FormatError::Unrepresentable`] for a deck of one empty
    /// label (written as an empty file, which loads as an empty deck) or for a
    /// last label ending in `\n` when `options.trim_trailing_newline` is set.
    pub fn check_writable(&self, options: &DeckOptions) -> Result<(), FormatError> {
        self.check_delimiter(options.delimiter)?;

        let unrepresentable = |index: usize, label: &String| FormatError::Unrepresentable {
            index,
            label: label.clone(),
        };

        match self.cards.as_slice() {
            [only] if only.is_empty() => Err(unrepresentable(0, only)),
            [.., last] if options.trim_trailing_newline && last.ends_with('\n') => {
                Err(unrepresentable(self.cards.len() - 1, last))
            }
            _ => Ok(()),
        }
    }

    /// Writes the printable lines to `out`.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    #[cfg(feature = "std")]
    pub fn print<W: std::io::Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Writes the printable lines to standard output.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to standard output.
    #[cfg(feature = "std")]
    pub fn print_stdout(&self) -> std::io::Result<()> {
        self.print(&mut std::io::stdout().lock())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl Index<usize> for Deck {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

impl From<Vec<String>> for Deck {
    fn from(cards: Vec<String>) -> Self {
        Self { cards }
    }
}

impl<S: Into<String>> FromIterator<S> for Deck {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_labels(iter)
    }
}

impl<S: Into<String>> Extend<S> for Deck {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.cards.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Deck {
    type Item = String;
    type IntoIter = alloc::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
