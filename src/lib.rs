// Core modules
pub mod category;
pub mod classifier;
pub mod error;
pub mod filter;
pub mod scanner;

// Public API configuration and batch processing
pub mod config;
pub mod parallel;
mod tokenizer;

// Re-export key types for public API
pub use category::{Category, CategoryLookup, IcuLookup, RangeTable};
pub use classifier::{Neighbor, Operation, classify};
pub use config::{TokenizerConfig, TokenizerConfigBuilder};
pub use error::{Result, SegmentError};
pub use filter::{Segment, TokenFilter};
pub use parallel::ParallelConfig;
pub use scanner::{CodeUnits, Scanner};
pub use tokenizer::Tokenizer;

/// Splits text into word tokens.
///
/// This is the simplest entry point: it uses the Unicode data compiled into
/// the crate and returns the word-like segments of `input` as slices of it,
/// in order. Punctuation, symbols and whitespace are dropped.
///
/// # Examples
///
/// ```
/// use wordbreak::tokenize;
///
/// assert_eq!(
///     tokenize("walk 1,000.000,003 miles"),
///     vec!["walk", "1,000.000,003", "miles"]
/// );
/// assert!(tokenize(" $ ").is_empty());
/// ```
pub fn tokenize(input: &str) -> Vec<&str> {
    Tokenizer::new(&IcuLookup::new()).tokenize(input)
}

/// Splits UTF-16 text into word tokens.
///
/// Offsets are UTF-16 code units. Surrogate pairs are never split; a lone
/// surrogate is treated as a single non-word character.
///
/// # Examples
///
/// ```
/// use wordbreak::tokenize_utf16;
///
/// let text: Vec<u16> = "out-of-the-box".encode_utf16().collect();
/// let tokens: Vec<String> = tokenize_utf16(&text)
///     .into_iter()
///     .map(String::from_utf16_lossy)
///     .collect();
/// assert_eq!(tokens, vec!["out", "of", "the", "box"]);
/// ```
pub fn tokenize_utf16(input: &[u16]) -> Vec<&[u16]> {
    Tokenizer::new(&IcuLookup::new()).tokenize(input)
}

/// Word boundary byte offsets of `input`.
///
/// # Examples
///
/// ```
/// use wordbreak::boundaries;
///
/// assert_eq!(boundaries("the quick"), vec![0, 3, 4, 9]);
/// assert!(boundaries("").is_empty());
/// ```
pub fn boundaries(input: &str) -> Vec<usize> {
    Tokenizer::new(&IcuLookup::new()).boundaries(input)
}
