/// Error handling module for the word tokenizer.
///
/// Tokenization itself is total and never fails. The errors here come from
/// loading category data, from the optional input size limit, and from
/// batch workers.
use thiserror::Error;

/// Main error type for the word tokenizer.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// I/O errors while reading a category data file.
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A line of a property data file could not be parsed.
    #[error("Syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// A property data file names a category this crate does not know.
    #[error("Unknown word break category `{tag}` at line {line}")]
    UnknownCategory { line: usize, tag: String },

    /// A category name that is not a Word_Break value.
    #[error("Unknown word break category `{tag}`")]
    UnknownCategoryName { tag: String },

    /// A range is inverted or reaches past the last scalar value.
    #[error("Invalid codepoint range {start:04X}..{end:04X}")]
    InvalidRange { start: u32, end: u32 },

    /// Two ranges of a category table cover the same codepoint.
    #[error(
        "Overlapping ranges {:04X}..{:04X} and {:04X}..{:04X}",
        .first.0, .first.1, .second.0, .second.1
    )]
    OverlappingRanges { first: (u32, u32), second: (u32, u32) },

    /// Input exceeds the configured `max_input_size`.
    #[error("Input of {len} code units exceeds the limit of {limit}")]
    InputTooLarge { len: usize, limit: usize },

    /// A batch worker thread panicked.
    #[error("Worker error: {message}")]
    Worker { message: String },
}

/// Convenience type alias for Results in the word tokenizer.
pub type Result<T> = std::result::Result<T, SegmentError>;

impl SegmentError {
    /// Creates a new syntax error for the given 1-based line.
    pub fn syntax_error(line: usize, message: impl Into<String>) -> Self {
        SegmentError::Syntax {
            line,
            message: message.into(),
        }
    }

    /// Creates a new worker error.
    pub fn worker_error(message: impl Into<String>) -> Self {
        SegmentError::Worker {
            message: message.into(),
        }
    }

    /// Returns the data file line associated with this error, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            SegmentError::Syntax { line, .. } => Some(*line),
            SegmentError::UnknownCategory { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if this error means the category data is unusable.
    pub fn is_fatal(&self) -> bool {
        match self {
            SegmentError::Io { .. } => true,
            SegmentError::Syntax { .. } => true,
            SegmentError::UnknownCategory { .. } => true,
            SegmentError::UnknownCategoryName { .. } => false,
            SegmentError::InvalidRange { .. } => true,
            SegmentError::OverlappingRanges { .. } => true,
            SegmentError::InputTooLarge { .. } => false,
            SegmentError::Worker { .. } => false,
        }
    }
}
