use crate::classifier::{self, Neighbor, Operation};

/// The four categories around a candidate boundary: `c1 c2 | c3 c4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub c1: Neighbor,
    pub c2: Neighbor,
    pub c3: Neighbor,
    pub c4: Neighbor,
}

impl Window {
    /// A window positioned before the first character.
    pub fn new() -> Self {
        Self {
            c1: Neighbor::Edge,
            c2: Neighbor::Edge,
            c3: Neighbor::Edge,
            c4: Neighbor::Edge,
        }
    }

    /// Moves every slot one step left and puts `next` in c4.
    pub fn shift(&mut self, next: Neighbor) {
        self.c1 = self.c2;
        self.c2 = self.c3;
        self.c3 = self.c4;
        self.c4 = next;
    }

    /// Drops the character in c2 by copying c1 over it. c3 and c4 stay.
    pub fn collapse(&mut self) {
        self.c2 = self.c1;
    }

    /// True when c2 or c3 holds a character, i.e. there is a boundary to
    /// decide between them.
    pub fn straddles_text(&self) -> bool {
        !(self.c2.is_edge() && self.c3.is_edge())
    }

    pub fn classify(&self) -> Operation {
        classifier::classify(self.c1, self.c2, self.c3, self.c4)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new()
    }
}
