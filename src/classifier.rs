/// Boundary decision table for the UAX#29 word rules.
///
/// The classifier looks at two categories on each side of a candidate
/// boundary (c1 c2 | c3 c4) and decides what happens there. Rules are
/// tried in priority order; every arm may assume that the arms above it
/// did not match.
use crate::category::Category;

/// One slot of the classification window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    /// Start or end of text.
    Edge,
    Char(Category),
}

impl Neighbor {
    pub fn is_edge(self) -> bool {
        matches!(self, Neighbor::Edge)
    }
}

impl From<Category> for Neighbor {
    fn from(category: Category) -> Self {
        Neighbor::Char(category)
    }
}

/// What to do at the position between c2 and c3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// ÷, a word boundary.
    Break,
    /// ×, no boundary.
    NoBreak,
    /// →, ignore the Extend/Format character in c2.
    SkipRight,
}

/// Decides the operation for the boundary between `c2` and `c3`.
pub fn classify(c1: Neighbor, c2: Neighbor, c3: Neighbor, c4: Neighbor) -> Operation {
    use Category::*;
    use Neighbor::{Char, Edge};
    use Operation::*;

    match (c1, c2, c3, c4) {
        // WB1, WB2
        (_, Edge, Char(_), _) | (_, Char(_), Edge, _) => Break,
        // WB3
        (_, Char(CR), Char(LF), _) => NoBreak,
        // WB3a, WB3b
        (_, Char(b), _, _) if b.is_line_break() => Break,
        (_, _, Char(c), _) if c.is_line_break() => Break,
        // WB4
        (Char(_), Char(b), _, _) if b.is_extend_or_format() => SkipRight,
        // WB5
        (_, Char(b), Char(c), _) if b.is_ah_letter() && c.is_ah_letter() => NoBreak,
        // WB6
        (_, Char(b), Char(c), Char(d))
            if b.is_ah_letter() && c.is_mid_letter() && d.is_ah_letter() =>
        {
            NoBreak
        }
        // WB7
        (Char(a), Char(b), Char(c), _)
            if a.is_ah_letter() && b.is_mid_letter() && c.is_ah_letter() =>
        {
            NoBreak
        }
        // WB7a, WB7b, WB7c
        (_, Char(HebrewLetter), Char(SingleQuote), _) => NoBreak,
        (_, Char(HebrewLetter), Char(DoubleQuote), Char(HebrewLetter)) => NoBreak,
        (Char(HebrewLetter), Char(DoubleQuote), Char(HebrewLetter), _) => NoBreak,
        // WB8, WB9, WB10
        (_, Char(Numeric), Char(Numeric), _) => NoBreak,
        (_, Char(b), Char(Numeric), _) if b.is_ah_letter() => NoBreak,
        (_, Char(Numeric), Char(c), _) if c.is_ah_letter() => NoBreak,
        // WB11, WB12
        (Char(Numeric), Char(b), Char(Numeric), _) if b.is_mid_num() => NoBreak,
        (_, Char(Numeric), Char(c), Char(Numeric)) if c.is_mid_num() => NoBreak,
        // WB13
        (_, Char(Katakana), Char(Katakana), _) => NoBreak,
        // WB13a, WB13b
        (_, Char(ALetter | HebrewLetter | Numeric | Katakana | ExtendNumLet), Char(ExtendNumLet), _) => {
            NoBreak
        }
        (_, Char(ExtendNumLet), Char(ALetter | HebrewLetter | Numeric | Katakana), _) => NoBreak,
        // WB13c
        (_, Char(RegionalIndicator), Char(RegionalIndicator), _) => NoBreak,
        // WB14
        _ => Break,
    }
}
