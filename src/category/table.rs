use std::fs;
use std::path::Path;

use tracing::debug;

use super::ucd;
use super::{Category, CategoryLookup};
use crate::error::{Result, SegmentError};

const MAX_CODEPOINT: u32 = 0x10FFFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CategoryRange {
    start: u32,
    end: u32,
    category: Category,
}

/// Range-compressed category table.
///
/// Ranges are kept sorted and disjoint; adjacent ranges with the same
/// category are merged. Codepoints not covered by any range are
/// [`Category::Other`].
///
/// # Examples
///
/// ```
/// use wordbreak::{Category, CategoryLookup, RangeTable};
///
/// let table = RangeTable::from_ranges([
///     ('a' as u32, 'z' as u32, Category::ALetter),
///     ('0' as u32, '9' as u32, Category::Numeric),
/// ])
/// .unwrap();
///
/// assert_eq!(table.category('q' as u32), Category::ALetter);
/// assert_eq!(table.category('Q' as u32), Category::Other);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RangeTable {
    ranges: Vec<CategoryRange>,
}

impl RangeTable {
    /// Builds a table from inclusive `(start, end, category)` ranges.
    ///
    /// # Errors
    ///
    /// Fails with [`SegmentError::InvalidRange`] for an inverted range or one
    /// past `0x10FFFF`, and with [`SegmentError::OverlappingRanges`] if two
    /// ranges share a codepoint.
    pub fn from_ranges<I>(ranges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, u32, Category)>,
    {
        let mut sorted = Vec::new();
        for (start, end, category) in ranges {
            if start > end || end > MAX_CODEPOINT {
                return Err(SegmentError::InvalidRange { start, end });
            }
            sorted.push(CategoryRange {
                start,
                end,
                category,
            });
        }
        sorted.sort_unstable_by_key(|range| range.start);

        let mut merged: Vec<CategoryRange> = Vec::with_capacity(sorted.len());
        for range in sorted {
            match merged.last_mut() {
                Some(last) if last.end >= range.start => {
                    return Err(SegmentError::OverlappingRanges {
                        first: (last.start, last.end),
                        second: (range.start, range.end),
                    });
                }
                Some(last) if last.end + 1 == range.start && last.category == range.category => {
                    last.end = range.end;
                }
                _ => merged.push(range),
            }
        }

        debug!(ranges = merged.len(), "built word break category table");
        Ok(Self { ranges: merged })
    }

    /// Parses the text of a UCD `WordBreakProperty.txt` file.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed line or out-of-range codepoint
    /// ([`SegmentError::Syntax`]), on the first unrecognized property value
    /// ([`SegmentError::UnknownCategory`]), and on overlapping ranges.
    pub fn from_ucd_str(source: &str) -> Result<Self> {
        let mut ranges = Vec::new();

        for (index, text) in source.lines().enumerate() {
            let line = index + 1;
            if ucd::is_blank_or_comment(text) {
                continue;
            }

            let (_, entry) = ucd::parse_entry(text).map_err(|_| {
                SegmentError::syntax_error(
                    line,
                    format!("expected `XXXX[..YYYY] ; Category`, found `{}`", text.trim()),
                )
            })?;
            if entry.start > entry.end || entry.end > MAX_CODEPOINT {
                return Err(SegmentError::syntax_error(
                    line,
                    format!("invalid codepoint range {:04X}..{:04X}", entry.start, entry.end),
                ));
            }
            let category =
                Category::from_ucd_tag(entry.tag).ok_or_else(|| SegmentError::UnknownCategory {
                    line,
                    tag: entry.tag.to_string(),
                })?;
            ranges.push((entry.start, entry.end, category));
        }

        Self::from_ranges(ranges)
    }

    /// Reads and parses a UCD `WordBreakProperty.txt` file.
    ///
    /// # Errors
    ///
    /// I/O failures surface as [`SegmentError::Io`]; see
    /// [`RangeTable::from_ucd_str`] for the rest.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        let table = Self::from_ucd_str(&source)?;
        debug!(path = %path.display(), ranges = table.len(), "loaded word break data");
        Ok(table)
    }

    /// Number of ranges after merging.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl CategoryLookup for RangeTable {
    fn category(&self, codepoint: u32) -> Category {
        let index = self.ranges.partition_point(|range| range.end < codepoint);
        match self.ranges.get(index) {
            Some(range) if range.start <= codepoint => range.category,
            _ => Category::Other,
        }
    }
}
