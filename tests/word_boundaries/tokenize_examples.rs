//! Tokenization through a property table loaded from disk, checked against
//! the compiled-in Unicode data.

use pretty_assertions::assert_eq;

use wordbreak::{Category, CategoryLookup, IcuLookup, RangeTable, SegmentError, Tokenizer};

use super::fixture_path;

static PROPERTY_FILE: &str = "tests/word_boundaries/WordBreakProperty-mini.txt";

fn load_table() -> anyhow::Result<RangeTable> {
    Ok(RangeTable::load(fixture_path(PROPERTY_FILE))?)
}

// Every sample only uses characters the mini table covers.
const SAMPLES: &[&str] = &[
    "This is a simple string",
    "the foo's bar",
    "the peoples' republic",
    "the \"foo\" bar",
    "Mr. Smith",
    "walk 1,000.000,003 miles",
    "can\u{2019}t stop; won't stop",
    "foo_bar_1 and _x_",
    "a:b c:d: e",
    "r\u{e9}sum\u{e9} na\u{ef}ve",
    "\u{5d0}\"\u{5d1} \u{5d0}' \u{5d0}\u{5d1}",
    "\u{30ab}\u{30bf}\u{30ab}\u{30ca}_x",
    "\u{1f1ef}\u{1f1f5}\u{1f1fa}\u{1f1f8}",
    "line one\r\nline two\u{85}three",
];

#[test]
fn loaded_table_classifies_fixture_entries() -> anyhow::Result<()> {
    let table = load_table()?;
    assert!(!table.is_empty());

    assert_eq!(table.category('a' as u32), Category::ALetter);
    assert_eq!(table.category(0x05D3), Category::HebrewLetter);
    assert_eq!(table.category(0x30AB), Category::Katakana);
    assert_eq!(table.category(0x2019), Category::MidNumLet);
    assert_eq!(table.category(0x1F1EF), Category::RegionalIndicator);
    assert_eq!(table.category(' ' as u32), Category::Other);
    assert_eq!(table.category(0x00D7), Category::Other);
    assert_eq!(table.category(0x4E2D), Category::Other);
    Ok(())
}

#[test]
fn loaded_table_agrees_with_compiled_data() -> anyhow::Result<()> {
    let table = load_table()?;
    let icu = IcuLookup::new();
    let from_file = Tokenizer::new(&table);
    let compiled = Tokenizer::new(&icu);

    for sample in SAMPLES {
        assert_eq!(
            from_file.boundaries(*sample),
            compiled.boundaries(*sample),
            "sample {:?}",
            sample
        );
        assert_eq!(from_file.tokenize(*sample), compiled.tokenize(*sample));
    }
    Ok(())
}

#[test]
fn tokens_from_loaded_table() -> anyhow::Result<()> {
    let table = load_table()?;
    let tokenizer = Tokenizer::new(&table);

    assert_eq!(
        tokenizer.tokenize("can\u{2019}t stop; won't stop"),
        vec!["can\u{2019}t", "stop", "won't", "stop"]
    );
    assert_eq!(tokenizer.tokenize("foo_bar_1 and _x_"), vec!["foo_bar_1", "and", "_x_"]);
    assert_eq!(tokenizer.tokenize("a:b c:d: e"), vec!["a:b", "c:d", "e"]);

    // Flag sequences stay in one segment but are not words.
    let flags = "\u{1f1ef}\u{1f1f5}\u{1f1fa}\u{1f1f8}";
    assert_eq!(tokenizer.boundaries(flags), vec![0, flags.len()]);
    assert!(tokenizer.tokenize(flags).is_empty());
    Ok(())
}

#[test]
fn batch_over_loaded_table() -> anyhow::Result<()> {
    let table = load_table()?;
    let tokenizer = Tokenizer::new(&table);

    let batched = tokenizer.tokenize_batch(SAMPLES)?;
    assert_eq!(batched.len(), SAMPLES.len());
    for (sample, tokens) in SAMPLES.iter().zip(&batched) {
        assert_eq!(tokens, &tokenizer.tokenize(*sample));
    }
    Ok(())
}

#[test]
fn missing_property_file_is_an_io_error() {
    match RangeTable::load(fixture_path("tests/word_boundaries/missing.txt")) {
        Err(err @ SegmentError::Io { .. }) => assert!(err.is_fatal()),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}
