//! Plain-text deck import and export.
//!
//! One card per line:
//!
//! ```text
//! "term":"definition":mistakes
//! ```
//!
//! Lines that do not split into exactly three `:`-separated fields are skipped.

use crate::{Card, Deck, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Render one card in the export format
pub fn encode_card(card: &Card) -> String {
    format!("{}:{}", card, card.mistakes)
}

/// Parse one line of the export format, `None` if it has the wrong shape
pub fn decode_line(line: &str) -> Option<Card> {
    let parts: Vec<&str> = line.split(':').collect();
    let [term, definition, mistakes] = parts.as_slice() else {
        return None;
    };

    let strip = |field: &str| field.trim_matches(|c: char| c == '"' || c == ' ').to_string();
    let mistakes = mistakes.trim().parse::<u32>().unwrap_or(0);

    Some(Card::new(strip(*term), strip(*definition)).with_mistakes(mistakes))
}

/// Parse a whole file body, skipping malformed lines
pub fn decode(contents: &str) -> Vec<Card> {
    contents
        .lines()
        .enumerate()
        .filter_map(|(line_num, line)| {
            let card = decode_line(line);
            if card.is_none() {
                tracing::debug!("Skipping malformed line {}: {:?}", line_num + 1, line);
            }
            card
        })
        .collect()
}

/// Import cards from `path` into `deck`, overwriting cards with the same term.
///
/// Returns `Ok(None)` when the file does not exist (the deck is untouched),
/// otherwise the number of lines that parsed.
pub fn import_file(deck: &mut Deck, path: &Path) -> Result<Option<usize>> {
    if !path.exists() {
        tracing::info!("Import file {:?} not found", path);
        return Ok(None);
    }

    let bytes = std::fs::read(path)?;
    let cards = decode(&String::from_utf8_lossy(&bytes));
    let count = cards.len();
    for card in cards {
        deck.upsert(card);
    }

    tracing::info!("Imported {} cards from {:?}", count, path);
    Ok(Some(count))
}

/// Write every card of `deck` to `path` in insertion order, replacing the file
pub fn export_file(deck: &Deck, path: &Path) -> Result<usize> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for card in deck.iter() {
        writeln!(writer, "{}", encode_card(card))?;
    }
    writer.flush()?;

    tracing::info!("Exported {} cards to {:?}", deck.len(), path);
    Ok(deck.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_encode_card() {
        let card = Card::new("capital of France", "Paris").with_mistakes(2);
        assert_eq!(encode_card(&card), "\"capital of France\":\"Paris\":2");
    }

    #[test]
    fn test_decode_line_strips_quotes_and_spaces() {
        let card = decode_line("\" dog \": \"a barking animal\" :3").unwrap();
        assert_eq!(card.term, "dog");
        assert_eq!(card.definition, "a barking animal");
        assert_eq!(card.mistakes, 3);
    }

    #[test]
    fn test_decode_line_bad_mistakes_defaults_to_zero() {
        let card = decode_line("\"dog\":\"woof\":many").unwrap();
        assert_eq!(card.mistakes, 0);
    }

    #[test]
    fn test_decode_line_rejects_wrong_field_count() {
        assert!(decode_line("").is_none());
        assert!(decode_line("\"dog\":\"woof\"").is_none());
        assert!(decode_line("\"time\":\"12:30\":0").is_none());
    }

    #[test]
    fn test_import_skips_malformed_lines() {
        crate::logging::init_test();
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("cards.txt");
        fs::write(
            &path,
            "\"dog\":\"woof\":1\nthis line is broken\n\"cat\":\"meow\":0\n",
        )
        .unwrap();

        let mut deck = Deck::new();
        let count = import_file(&mut deck, &path).unwrap();

        assert_eq!(count, Some(2));
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get("dog").unwrap().mistakes, 1);
        assert_eq!(deck.get("cat").unwrap().definition, "meow");
    }

    #[test]
    fn test_import_tolerates_invalid_utf8() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("cards.txt");
        fs::write(&path, b"\"caf\xe9\":\"coffee\":0\n\"tea\":\"leaves\":1\n").unwrap();

        let mut deck = Deck::new();
        assert_eq!(import_file(&mut deck, &path).unwrap(), Some(2));
        assert_eq!(deck.get("caf\u{FFFD}").unwrap().definition, "coffee");
        assert_eq!(deck.get("tea").unwrap().mistakes, 1);
    }

    #[test]
    fn test_import_missing_file_leaves_deck_untouched() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut deck = Deck::new();
        deck.add("dog", "woof").unwrap();

        let count = import_file(&mut deck, &temp_dir.path().join("missing.txt")).unwrap();

        assert_eq!(count, None);
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_import_overwrites_existing_term() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("cards.txt");
        fs::write(&path, "\"dog\":\"bark\":5\n").unwrap();

        let mut deck = Deck::new();
        deck.add("dog", "woof").unwrap();
        import_file(&mut deck, &path).unwrap();

        let card = deck.get("dog").unwrap();
        assert_eq!(card.definition, "bark");
        assert_eq!(card.mistakes, 5);
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_export_writes_insertion_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("cards.txt");

        let mut deck = Deck::new();
        deck.add("capital of France", "Paris").unwrap();
        deck.add("capital of Spain", "Madrid").unwrap();

        assert_eq!(export_file(&deck, &path).unwrap(), 2);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "\"capital of France\":\"Paris\":0\n\"capital of Spain\":\"Madrid\":0\n"
        );
    }

    #[test]
    fn test_export_then_import_preserves_cards() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("cards.txt");

        let deck: Deck = vec![
            Card::new("one", "uno").with_mistakes(1),
            Card::new("two", "dos"),
            Card::new("three", "tres").with_mistakes(7),
        ]
        .into_iter()
        .collect();
        export_file(&deck, &path).unwrap();

        let mut restored = Deck::new();
        assert_eq!(import_file(&mut restored, &path).unwrap(), Some(3));
        assert_eq!(restored, deck);
    }

    #[test]
    fn test_export_overwrites_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("cards.txt");
        fs::write(&path, "old contents\nmore old contents\n").unwrap();

        assert_eq!(export_file(&Deck::new(), &path).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_export_to_directory_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(export_file(&Deck::new(), temp_dir.path()).is_err());
    }
}
