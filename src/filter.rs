/// Turns boundary offsets into tokens.
///
/// Every pair of consecutive boundaries delimits a segment. Segments that
/// contain a letter, Katakana or digit are tokens; punctuation, symbol and
/// whitespace runs are not.
use std::ops::Range;

use crate::category::CategoryLookup;
use crate::scanner::{CodeUnits, Decoder};

/// The text between two consecutive boundaries.
#[derive(Debug, PartialEq, Eq)]
pub struct Segment<'input, S: ?Sized> {
    /// Position in the input, in code units.
    pub range: Range<usize>,
    pub text: &'input S,
    /// Whether the segment counts as a token.
    pub word_like: bool,
}

impl<S: ?Sized> Clone for Segment<'_, S> {
    fn clone(&self) -> Self {
        Self {
            range: self.range.clone(),
            text: self.text,
            word_like: self.word_like,
        }
    }
}

/// Selects word-like segments using a category lookup.
#[derive(Debug, Clone, Copy)]
pub struct TokenFilter<'l, L: CategoryLookup + ?Sized> {
    lookup: &'l L,
}

impl<'l, L: CategoryLookup + ?Sized> TokenFilter<'l, L> {
    pub fn new(lookup: &'l L) -> Self {
        Self { lookup }
    }

    /// True if `text` contains an ALetter, Hebrew_Letter, Katakana or
    /// Numeric codepoint. Stops at the first one.
    pub fn is_token<S: CodeUnits + ?Sized>(&self, text: &S) -> bool {
        Decoder::new(text).any(|decoded| self.lookup.category(decoded.codepoint).is_word_like())
    }

    /// Every segment between consecutive `boundaries`, in order.
    pub fn segments<'input, S: CodeUnits + ?Sized>(
        &self,
        input: &'input S,
        boundaries: &[usize],
    ) -> Vec<Segment<'input, S>> {
        boundaries
            .windows(2)
            .map(|pair| {
                let text = input.slice_units(pair[0]..pair[1]);
                Segment {
                    range: pair[0]..pair[1],
                    text,
                    word_like: self.is_token(text),
                }
            })
            .collect()
    }

    /// The word-like segments between consecutive `boundaries`, verbatim.
    pub fn tokens<'input, S: CodeUnits + ?Sized>(
        &self,
        input: &'input S,
        boundaries: &[usize],
    ) -> Vec<&'input S> {
        boundaries
            .windows(2)
            .map(|pair| input.slice_units(pair[0]..pair[1]))
            .filter(|text| self.is_token(*text))
            .collect()
    }
}
