/// Word break categories and the lookup seam that maps codepoints to them.
///
/// `Category` is the closed set of property values the boundary rules look
/// at. Anything else in the Unicode Word_Break property folds into one of
/// these (see [`Category::from_ucd_tag`]).
mod icu;
mod table;
mod ucd;


pub use icu::IcuLookup;
pub use table::RangeTable;

use std::fmt;
use std::str::FromStr;

use crate::error::SegmentError;

/// Word break property value of a single codepoint.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    CR,
    LF,
    Newline,
    Extend,
    Format,
    Katakana,
    ALetter,
    HebrewLetter,
    SingleQuote,
    DoubleQuote,
    MidLetter,
    MidNum,
    MidNumLet,
    Numeric,
    ExtendNumLet,
    RegionalIndicator,
    /// Unmapped or unassigned codepoints.
    Other,
}

impl Category {
    /// ALetter or Hebrew_Letter.
    pub fn is_ah_letter(self) -> bool {
        matches!(self, Category::ALetter | Category::HebrewLetter)
    }

    /// MidLetter, MidNumLet or Single_Quote.
    pub fn is_mid_letter(self) -> bool {
        matches!(
            self,
            Category::MidLetter | Category::MidNumLet | Category::SingleQuote
        )
    }

    /// MidNum, MidNumLet or Single_Quote.
    pub fn is_mid_num(self) -> bool {
        matches!(
            self,
            Category::MidNum | Category::MidNumLet | Category::SingleQuote
        )
    }

    pub fn is_extend_or_format(self) -> bool {
        matches!(self, Category::Extend | Category::Format)
    }

    /// Newline, CR or LF.
    pub fn is_line_break(self) -> bool {
        matches!(self, Category::Newline | Category::CR | Category::LF)
    }

    /// Categories that make a segment count as a token.
    pub fn is_word_like(self) -> bool {
        matches!(
            self,
            Category::ALetter | Category::HebrewLetter | Category::Katakana | Category::Numeric
        )
    }

    /// The UCD name of this category, as written in `WordBreakProperty.txt`.
    pub fn ucd_name(self) -> &'static str {
        match self {
            Category::CR => "CR",
            Category::LF => "LF",
            Category::Newline => "Newline",
            Category::Extend => "Extend",
            Category::Format => "Format",
            Category::Katakana => "Katakana",
            Category::ALetter => "ALetter",
            Category::HebrewLetter => "Hebrew_Letter",
            Category::SingleQuote => "Single_Quote",
            Category::DoubleQuote => "Double_Quote",
            Category::MidLetter => "MidLetter",
            Category::MidNum => "MidNum",
            Category::MidNumLet => "MidNumLet",
            Category::Numeric => "Numeric",
            Category::ExtendNumLet => "ExtendNumLet",
            Category::RegionalIndicator => "Regional_Indicator",
            Category::Other => "Other",
        }
    }

    /// Maps a UCD property value name onto the rule set.
    ///
    /// Values introduced after this rule set was written fold in: ZWJ is
    /// treated as Extend, the emoji and space values as Other. Returns
    /// `None` for names that are not Word_Break values at all.
    pub fn from_ucd_tag(tag: &str) -> Option<Self> {
        let category = match tag {
            "CR" => Category::CR,
            "LF" => Category::LF,
            "Newline" => Category::Newline,
            "Extend" | "ZWJ" => Category::Extend,
            "Format" => Category::Format,
            "Katakana" => Category::Katakana,
            "ALetter" => Category::ALetter,
            "Hebrew_Letter" => Category::HebrewLetter,
            "Single_Quote" => Category::SingleQuote,
            "Double_Quote" => Category::DoubleQuote,
            "MidLetter" => Category::MidLetter,
            "MidNum" => Category::MidNum,
            "MidNumLet" => Category::MidNumLet,
            "Numeric" => Category::Numeric,
            "ExtendNumLet" => Category::ExtendNumLet,
            "Regional_Indicator" => Category::RegionalIndicator,
            "Other" | "XX" | "E_Base" | "E_Modifier" | "E_Base_GAZ" | "Glue_After_Zwj"
            | "WSegSpace" => Category::Other,
            _ => return None,
        };
        Some(category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ucd_name())
    }
}

impl FromStr for Category {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_ucd_tag(s).ok_or_else(|| SegmentError::UnknownCategoryName {
            tag: s.to_string(),
        })
    }
}

/// Maps a codepoint to its word break category.
///
/// Implementations must be total over `u32`: surrogates, unassigned
/// codepoints and values above `0x10FFFF` answer [`Category::Other`].
/// Lookups are shared read-only across threads, hence the `Sync` bound.
pub trait CategoryLookup: Sync {
    fn category(&self, codepoint: u32) -> Category;
}

impl<L: CategoryLookup + ?Sized> CategoryLookup for &L {
    fn category(&self, codepoint: u32) -> Category {
        (**self).category(codepoint)
    }
}
