use tracing::debug;

use crate::category::CategoryLookup;
use crate::config::TokenizerConfig;
use crate::error::{Result, SegmentError};
use crate::filter::{Segment, TokenFilter};
use crate::parallel;
use crate::scanner::{CodeUnits, Scanner};

/// Word tokenizer over an injected category lookup.
///
/// The tokenizer holds no per-call state: every method works on its
/// arguments and the read-only lookup, so one instance can serve many
/// threads.
///
/// # Examples
///
/// ```
/// use wordbreak::{IcuLookup, Tokenizer};
///
/// let lookup = IcuLookup::new();
/// let tokenizer = Tokenizer::new(&lookup);
///
/// assert_eq!(tokenizer.tokenize("the foo's bar"), vec!["the", "foo's", "bar"]);
/// assert_eq!(tokenizer.boundaries("Mr. Smith"), vec![0, 2, 3, 4, 9]);
/// ```
#[derive(Debug)]
pub struct Tokenizer<'l, L: CategoryLookup + ?Sized> {
    lookup: &'l L,
    config: TokenizerConfig,
}

impl<'l, L: CategoryLookup + ?Sized> Tokenizer<'l, L> {
    /// Creates a tokenizer with the default configuration.
    pub fn new(lookup: &'l L) -> Self {
        Self::with_config(lookup, TokenizerConfig::default())
    }

    pub fn with_config(lookup: &'l L, config: TokenizerConfig) -> Self {
        Self { lookup, config }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    pub fn lookup(&self) -> &'l L {
        self.lookup
    }

    /// Word boundary offsets of `input`, in code units.
    pub fn boundaries<S: CodeUnits + ?Sized>(&self, input: &S) -> Vec<usize> {
        Scanner::new(self.lookup).scan(input)
    }

    /// Every segment of `input`, word-like or not.
    pub fn segments<'input, S: CodeUnits + ?Sized>(
        &self,
        input: &'input S,
    ) -> Vec<Segment<'input, S>> {
        let boundaries = self.boundaries(input);
        TokenFilter::new(self.lookup).segments(input, &boundaries)
    }

    /// The word-like segments of `input`, in order and unmodified.
    pub fn tokenize<'input, S: CodeUnits + ?Sized>(&self, input: &'input S) -> Vec<&'input S> {
        let boundaries = self.boundaries(input);
        TokenFilter::new(self.lookup).tokens(input, &boundaries)
    }

    /// Like [`Tokenizer::tokenize`], but refuses input longer than the
    /// configured `max_input_size`.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::InputTooLarge`] when the limit is exceeded.
    pub fn try_tokenize<'input, S: CodeUnits + ?Sized>(
        &self,
        input: &'input S,
    ) -> Result<Vec<&'input S>> {
        let len = input.unit_len();
        if let Some(limit) = self.config.max_input_size {
            if len > limit {
                debug!(len, limit, "rejecting oversized input");
                return Err(SegmentError::InputTooLarge { len, limit });
            }
        }
        Ok(self.tokenize(input))
    }

    /// Tokenizes every input of a batch, possibly on several threads.
    /// The result has one entry per input, in input order.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::Worker`] if a worker thread panics.
    pub fn tokenize_batch<'input>(&self, inputs: &[&'input str]) -> Result<Vec<Vec<&'input str>>> {
        parallel::run_batch(&self.config.parallel, inputs, |input| self.tokenize(input))
    }
}
