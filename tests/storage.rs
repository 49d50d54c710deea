//! File persistence integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use deckrs::{Deck, DeckOptions, FormatError, LoadError, SaveError};

/// Temp file path that is removed when dropped, even if the test panics.
struct TempFile(PathBuf);

impl TempFile {
    fn new(name: &str) -> Self {
        Self(std::env::temp_dir().join(format!("deckrs-{}-{name}.txt", std::process::id())))
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        fs::remove_file(&self.0).ok();
    }
}

#[test]
fn save_then_load_round_trips() {
    let file = TempFile::new("round-trip");
    let deck = Deck::from_labels(["X", "Y"]);

    deck.save_to_file(file.path()).unwrap();
    let loaded = Deck::load_from_file(file.path()).unwrap();

    assert_eq!(loaded.labels(), ["X", "Y"]);
}

#[test]
fn saved_file_is_plain_comma_separated_text() {
    let file = TempFile::new("format");
    Deck::new().save_to_file(file.path()).unwrap();
    let text = fs::read_to_string(file.path()).unwrap();

    assert_eq!(
        text,
        "Ace of Spades,Two of Hearts,Three of Diamonds,Two of Spades"
    );
}

#[test]
fn save_overwrites_existing_file() {
    let file = TempFile::new("overwrite");
    Deck::full().save_to_file(file.path()).unwrap();
    Deck::from_labels(["only"]).save_to_file(file.path()).unwrap();
    let loaded = Deck::load_from_file(file.path()).unwrap();

    assert_eq!(loaded.labels(), ["only"]);
}

#[test]
fn save_rejects_label_with_delimiter() {
    let file = TempFile::new("rejected");
    let deck = Deck::from_labels(["Ace of Spades", "Ten, of Clubs"]);

    let err = deck.save_to_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        SaveError::Format(FormatError::ContainsDelimiter { index: 1, .. })
    ));
    assert!(!file.path().exists());
}

#[test]
fn save_rejects_single_empty_label() {
    let file = TempFile::new("single-empty");
    let deck = Deck::from_labels([""]);

    let err = deck.save_to_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        SaveError::Format(FormatError::Unrepresentable { index: 0, .. })
    ));
    assert!(!file.path().exists());
}

#[test]
fn save_rejects_trailing_newline_in_last_label() {
    let file = TempFile::new("trailing-newline");

    for deck in [
        Deck::from_labels(["A", "B\n"]),
        Deck::from_labels(["A", "B\r\n"]),
    ] {
        let err = deck.save_to_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            SaveError::Format(FormatError::Unrepresentable { index: 1, .. })
        ));
        assert!(!file.path().exists());
    }
}

#[test]
fn trailing_newline_round_trips_when_not_trimmed() {
    let file = TempFile::new("kept-newline");
    let options = DeckOptions::default().with_trim_trailing_newline(false);
    let deck = Deck::from_labels(["A", "B\n"]);

    deck.save_to_file_with(file.path(), &options).unwrap();
    let loaded = Deck::load_from_file_with(file.path(), &options).unwrap();

    assert_eq!(loaded, deck);
}

#[test]
fn empty_labels_round_trip_when_not_alone() {
    let file = TempFile::new("empty-labels");
    let deck = Deck::from_labels(["", "A", ""]);

    deck.save_to_file(file.path()).unwrap();
    let loaded = Deck::load_from_file(file.path()).unwrap();

    assert_eq!(loaded, deck);
}

#[test]
fn save_to_missing_directory_fails() {
    let dir = TempFile::new("missing-dir");
    let err = Deck::new()
        .save_to_file(dir.path().join("deck.txt"))
        .unwrap_err();
    assert!(matches!(err, SaveError::Io { .. }));
}

#[test]
fn load_missing_file_returns_read_error() {
    let file = TempFile::new("does-not-exist");
    let err = Deck::load_from_file(file.path()).unwrap_err();
    let LoadError::Read { path: reported, .. } = &err;
    assert_eq!(reported, file.path());
    assert!(err.to_string().starts_with("file read error"));
}

#[test]
fn load_tolerates_trailing_newline() {
    let file = TempFile::new("newline");
    fs::write(file.path(), "A,B,C\n").unwrap();
    let loaded = Deck::load_from_file(file.path()).unwrap();
    let raw = Deck::load_from_file_with(
        file.path(),
        &DeckOptions::default().with_trim_trailing_newline(false),
    )
    .unwrap();

    assert_eq!(loaded.labels(), ["A", "B", "C"]);
    assert_eq!(raw.labels(), ["A", "B", "C\n"]);
}

#[test]
fn empty_file_loads_empty_deck() {
    let file = TempFile::new("empty");
    Deck::empty().save_to_file(file.path()).unwrap();
    let loaded = Deck::load_from_file(file.path()).unwrap();

    assert!(loaded.is_empty());
}

#[test]
fn custom_delimiter_round_trips_through_file() {
    let file = TempFile::new("pipe");
    let options = DeckOptions::default().with_delimiter('|');
    let deck = Deck::from_labels(["A,1", "B,2"]);

    deck.save_to_file_with(file.path(), &options).unwrap();
    let loaded = Deck::load_from_file_with(file.path(), &options).unwrap();

    assert_eq!(loaded, deck);
}
