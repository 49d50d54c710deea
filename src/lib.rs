//! A deck of playing cards as an ordered list of string labels.
//!
//! The crate provides a [`Deck`] type that can be built, printed, dealt into
//! a hand and a remainder, shuffled, and written to or read from a plain-text
//! file. The [`handoff`] module runs one background task and waits for its
//! single result.
//!
//! # Example
//!
//! ```no_run
//! use deckrs::Deck;
//!
//! let deck = Deck::new();
//! let (hand, remaining) = deck.deal(2)?;
//! hand.save_to_file("hand.txt")?;
//! let _ = remaining;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
#[cfg(feature = "std")]
pub mod handoff;
pub mod options;
#[cfg(feature = "std")]
mod storage;

// Re-export main types
pub use card::{DEFAULT_LABELS, STANDARD_DECK_SIZE, new_card};
pub use deck::Deck;
pub use error::{DealError, FormatError};
#[cfg(feature = "std")]
pub use error::{HandoffError, LoadError, SaveError};
#[cfg(feature = "std")]
pub use handoff::Handoff;
pub use options::{DEFAULT_DELIMITER, DeckOptions};
