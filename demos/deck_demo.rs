//! Walks through building, printing, dealing, saving and loading a deck.
//!
//! Run with `RUST_LOG=debug` to see the library's log events.

use core::error::Error;
use std::io::{self, Write};

use deckrs::{Deck, handoff, new_card};
use tracing_subscriber::EnvFilter;

const DECK_FILE: &str = "my_cards.txt";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut out = io::stdout().lock();

    let mut card = String::from("Ace of Spades");
    writeln!(out, "{card}")?;
    card = new_card();
    writeln!(out, "Hello, World!")?;
    writeln!(out, "{card}")?;

    // A deck grows by appending labels.
    let mut scratch = Deck::from_labels([new_card(), new_card()]);
    writeln!(out, "{:?}", scratch.labels())?;
    scratch.push("King of Hearts");
    scratch.print(&mut out)?;
    writeln!(out, "Total cards: {}", scratch.len())?;

    let cards = Deck::new();
    cards.print(&mut out)?;
    if let Some(top) = cards.first() {
        writeln!(out, "{top}")?;
    }

    let hand_size = cards.len().saturating_sub(2);
    let (hand, remaining) = cards.clone().deal(hand_size)?;
    writeln!(out, "\nHand:")?;
    hand.print(&mut out)?;
    writeln!(out, "\nRemaining:")?;
    remaining.print(&mut out)?;

    writeln!(out, "\n{}", cards.to_text())?;
    cards.save_to_file(DECK_FILE)?;
    let from_file = Deck::load_from_file(DECK_FILE)?;
    writeln!(out, "{}", from_file.to_text())?;

    let mut shuffled = Deck::full();
    shuffled.shuffle(2024);
    let (five, _) = shuffled.deal(5)?;
    writeln!(out, "\nFive from a shuffled deck:")?;
    write!(out, "{five}")?;

    let message = handoff::greet()?.wait()?;
    writeln!(out, "\n{message}")?;

    Ok(())
}
