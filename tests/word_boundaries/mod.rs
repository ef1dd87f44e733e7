use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;

use wordbreak::{IcuLookup, Tokenizer};

mod tokenize_examples;

// -----------------------------------------------------------------------------
// Constants & Helpers
// -----------------------------------------------------------------------------

lazy_static! {
    static ref MARKER_RE: Regex =
        Regex::new(r"(?P<op>[÷×])\s*(?P<cp>[0-9A-Fa-f]{4,6})?").expect("regex");
}

static CASES_FILE: &str = "tests/word_boundaries/cases.txt";

fn fixture_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// A single annotated boundary case.
#[derive(Debug, Clone)]
struct BoundaryCase {
    line: usize,
    text: String,
    /// Expected boundaries in UTF-8 bytes.
    utf8: Vec<usize>,
    /// Expected boundaries in UTF-16 code units.
    utf16: Vec<usize>,
}

impl BoundaryCase {
    fn parse(line: usize, source: &str) -> anyhow::Result<Self> {
        let mut text = String::new();
        let mut utf8 = Vec::new();
        let mut utf16 = Vec::new();
        let mut units16 = 0;

        for captures in MARKER_RE.captures_iter(source) {
            if &captures["op"] == "÷" {
                utf8.push(text.len());
                utf16.push(units16);
            }
            if let Some(cp) = captures.name("cp") {
                let value = u32::from_str_radix(cp.as_str(), 16)?;
                let ch = char::from_u32(value)
                    .ok_or_else(|| anyhow::anyhow!("line {}: invalid scalar {:04X}", line, value))?;
                text.push(ch);
                units16 += ch.len_utf16();
            }
        }

        anyhow::ensure!(!text.is_empty(), "line {}: no codepoints", line);
        Ok(Self {
            line,
            text,
            utf8,
            utf16,
        })
    }
}

fn load_cases(path: &Path) -> anyhow::Result<Vec<BoundaryCase>> {
    let source = fs::read_to_string(path)?;
    let mut cases = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let data = raw.split('#').next().unwrap_or("").trim();
        if data.is_empty() {
            continue;
        }
        cases.push(BoundaryCase::parse(index + 1, data)?);
    }

    Ok(cases)
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[test]
fn annotated_boundary_cases() -> anyhow::Result<()> {
    let cases = load_cases(&fixture_path(CASES_FILE))?;
    assert!(cases.len() >= 15, "expected the full case list");

    let lookup = IcuLookup::new();
    let tokenizer = Tokenizer::new(&lookup);
    let mut failures = Vec::new();

    for case in &cases {
        let actual = tokenizer.boundaries(case.text.as_str());
        if actual != case.utf8 {
            failures.push(format!(
                "line {} (UTF-8) {:?}: expected {:?}, got {:?}",
                case.line, case.text, case.utf8, actual
            ));
        }

        let units: Vec<u16> = case.text.encode_utf16().collect();
        let actual = tokenizer.boundaries(units.as_slice());
        if actual != case.utf16 {
            failures.push(format!(
                "line {} (UTF-16) {:?}: expected {:?}, got {:?}",
                case.line, case.text, case.utf16, actual
            ));
        }
    }

    assert!(failures.is_empty(), "boundary mismatches:\n{}", failures.join("\n"));
    Ok(())
}

#[test]
fn case_parser_tracks_both_encodings() -> anyhow::Result<()> {
    let case = BoundaryCase::parse(1, "÷ 0061 × 10400 ÷ 0020 ÷")?;
    assert_eq!(case.text, "a\u{10400} ");
    assert_eq!(case.utf8, vec![0, 5, 6]);
    assert_eq!(case.utf16, vec![0, 3, 4]);
    Ok(())
}
