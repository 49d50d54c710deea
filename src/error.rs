//! Error types for deck operations.

use alloc::string::String;
#[cfg(feature = "std")]
use std::io;
#[cfg(feature = "std")]
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Hand size exceeds the number of cards in the deck.
    #[error("index out of range: hand size {hand_size} exceeds deck of {len} cards")]
    OutOfRange {
        /// Requested hand size.
        hand_size: usize,
        /// Number of cards in the deck.
        len: usize,
    },
}

/// Errors that make a deck impossible to write in the text format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A label contains the delimiter and would split into two cards on load.
    #[error("card {index} ({label:?}) contains the delimiter {delimiter:?}")]
    ContainsDelimiter {
        /// Zero-based position of the offending card.
        index: usize,
        /// The offending label.
        label: String,
        /// The delimiter in use.
        delimiter: char,
    },
    /// A label would come back changed on load: a lone empty label, or a last
    /// label ending in a newline while trailing newlines are trimmed.
    #[error("card {index} ({label:?}) cannot be written without changing on load")]
    Unrepresentable {
        /// Zero-based position of the offending card.
        index: usize,
        /// The offending label.
        label: String,
    },
}

/// Errors that can occur while saving a deck to a file.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum SaveError {
    /// The deck cannot be represented in the text format.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// Writing the file failed.
    #[error("failed to write {}", .path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Errors that can occur while loading a deck from a file.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the file failed.
    #[error("file read error: {}", .path.display())]
    Read {
        /// Source path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Errors that can occur while waiting on a handoff.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum HandoffError {
    /// The worker thread could not be spawned.
    #[error("failed to spawn worker thread")]
    Spawn(#[source] io::Error),
    /// The worker exited (or panicked) without sending a value.
    #[error("worker exited without sending a value")]
    Disconnected,
}
