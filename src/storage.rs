//! Saving and loading decks as plain-text files.
//!
//! The file holds the labels joined by the delimiter, with no header and no
//! escaping. Saving refuses any deck that would load back changed (see
//! [`Deck::check_writable`]), so every file written here loads back to the
//! same deck when read with the same options.

use std::fs;
use std::path::Path;

use crate::deck::Deck;
use crate::error::{LoadError, SaveError};
use crate::options::DeckOptions;

impl Deck {
    /// Saves the deck to `path` with the default options.
    ///
    /// # Errors
    ///
    /// See [`Deck::save_to_file_with`].
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        self.save_to_file_with(path, &DeckOptions::default())
    }

    /// Saves the deck to `path`, creating the file or truncating an existing one.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::Format`] if the deck would not load back unchanged
    /// (nothing is written in that case) and [`SaveError::Io`] if the write
    /// fails.
    pub fn save_to_file_with(
        &self,
        path: impl AsRef<Path>,
        options: &DeckOptions,
    ) -> Result<(), SaveError> {
        let path = path.as_ref();

        if let Err(err) = self.check_writable(options) {
            tracing::warn!(path = %path.display(), %err, "refusing to save deck");
            return Err(err.into());
        }

        fs::write(path, self.to_text_with(options)).map_err(|source| SaveError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), cards = self.len(), "saved deck");
        Ok(())
    }

    /// Loads a deck from `path` with the default options.
    ///
    /// # Errors
    ///
    /// See [`Deck::load_from_file_with`].
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::load_from_file_with(path, &DeckOptions::default())
    }

    /// Reads the whole file at `path` and parses it into a deck.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Read`] if the file cannot be read or is not valid
    /// UTF-8.
    pub fn load_from_file_with(
        path: impl AsRef<Path>,
        options: &DeckOptions,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|source| {
            tracing::warn!(path = %path.display(), %source, "failed to read deck");
            LoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let deck = Self::from_text_with(&text, options);
        tracing::info!(path = %path.display(), cards = deck.len(), "loaded deck");
        Ok(deck)
    }
}
