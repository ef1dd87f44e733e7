use icu_properties::maps::{self, CodePointMapDataBorrowed};
use icu_properties::WordBreak;

use super::{Category, CategoryLookup};

/// Category lookup backed by the Unicode data compiled into `icu_properties`.
///
/// The data is baked into the binary, so construction cannot fail and the
/// value is free to copy around.
#[derive(Debug, Clone, Copy)]
pub struct IcuLookup {
    map: CodePointMapDataBorrowed<'static, WordBreak>,
}

impl IcuLookup {
    pub fn new() -> Self {
        Self {
            map: maps::word_break(),
        }
    }
}

impl Default for IcuLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryLookup for IcuLookup {
    fn category(&self, codepoint: u32) -> Category {
        from_word_break(self.map.get32(codepoint))
    }
}

fn from_word_break(value: WordBreak) -> Category {
    match value {
        WordBreak::CR => Category::CR,
        WordBreak::LF => Category::LF,
        WordBreak::Newline => Category::Newline,
        WordBreak::Extend | WordBreak::ZWJ => Category::Extend,
        WordBreak::Format => Category::Format,
        WordBreak::Katakana => Category::Katakana,
        WordBreak::ALetter => Category::ALetter,
        WordBreak::HebrewLetter => Category::HebrewLetter,
        WordBreak::SingleQuote => Category::SingleQuote,
        WordBreak::DoubleQuote => Category::DoubleQuote,
        WordBreak::MidLetter => Category::MidLetter,
        WordBreak::MidNum => Category::MidNum,
        WordBreak::MidNumLet => Category::MidNumLet,
        WordBreak::Numeric => Category::Numeric,
        WordBreak::ExtendNumLet => Category::ExtendNumLet,
        WordBreak::RegionalIndicator => Category::RegionalIndicator,
        _ => Category::Other,
    }
}
