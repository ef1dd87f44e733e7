use std::ops::Range;

const HIGH_SURROGATES: Range<u16> = 0xD800..0xDC00;
const LOW_SURROGATES: Range<u16> = 0xDC00..0xE000;

/// Text addressed by code-unit offsets.
///
/// Implemented for UTF-8 `str`, where a unit is a byte, and for UTF-16
/// `[u16]`. Boundaries and token ranges are always expressed in these
/// units.
pub trait CodeUnits {
    /// Length of the text in code units.
    fn unit_len(&self) -> usize;

    /// Decodes the character starting at `offset`, returning its codepoint
    /// and its width in code units. `None` at or past the end.
    fn decode_at(&self, offset: usize) -> Option<(u32, usize)>;

    /// The text between two character boundaries.
    fn slice_units(&self, range: Range<usize>) -> &Self;
}

impl CodeUnits for str {
    fn unit_len(&self) -> usize {
        self.len()
    }

    fn decode_at(&self, offset: usize) -> Option<(u32, usize)> {
        let ch = self.get(offset..)?.chars().next()?;
        Some((u32::from(ch), ch.len_utf8()))
    }

    fn slice_units(&self, range: Range<usize>) -> &Self {
        &self[range]
    }
}

/// UTF-16 decoding that never fails.
///
/// A high surrogate joins with an immediately following low surrogate.
/// Any other surrogate (a high one at the end or before a non-low unit,
/// or a stray low one) decodes on its own as its unit value, which
/// category lookups resolve to `Other`. Valid pairs are never split.
impl CodeUnits for [u16] {
    fn unit_len(&self) -> usize {
        self.len()
    }

    fn decode_at(&self, offset: usize) -> Option<(u32, usize)> {
        let unit = *self.get(offset)?;
        if HIGH_SURROGATES.contains(&unit) {
            if let Some(&low) = self.get(offset + 1) {
                if LOW_SURROGATES.contains(&low) {
                    let high = u32::from(unit - HIGH_SURROGATES.start);
                    let low = u32::from(low - LOW_SURROGATES.start);
                    return Some((0x10000 + (high << 10) + low, 2));
                }
            }
        }
        Some((u32::from(unit), 1))
    }

    fn slice_units(&self, range: Range<usize>) -> &Self {
        &self[range]
    }
}

/// A decoded character and where it sits in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub offset: usize,
    pub width: usize,
    pub codepoint: u32,
}

/// Iterator over the characters of a [`CodeUnits`] text.
#[derive(Debug)]
pub struct Decoder<'input, S: CodeUnits + ?Sized> {
    input: &'input S,
    offset: usize,
}

impl<'input, S: CodeUnits + ?Sized> Decoder<'input, S> {
    pub fn new(input: &'input S) -> Self {
        Self { input, offset: 0 }
    }
}

impl<S: CodeUnits + ?Sized> Iterator for Decoder<'_, S> {
    type Item = Decoded;

    fn next(&mut self) -> Option<Decoded> {
        let (codepoint, width) = self.input.decode_at(self.offset)?;
        let decoded = Decoded {
            offset: self.offset,
            width,
            codepoint,
        };
        self.offset += width;
        Some(decoded)
    }
}
