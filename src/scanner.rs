/// Boundary scanner.
///
/// The scanner walks the input one character at a time, keeps the four
/// most recent categories in a [`Window`] and asks the classifier about
/// the boundary between the middle two. It trails the input by two
/// characters, so two extra steps with `Edge` shifted in drain the window
/// at the end.
mod decode;
mod window;


pub use decode::{CodeUnits, Decoded, Decoder};
pub use window::Window;

use tracing::trace;

use crate::category::CategoryLookup;
use crate::classifier::{Neighbor, Operation};

/// Collects word boundary offsets using a category lookup.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'l, L: CategoryLookup + ?Sized> {
    lookup: &'l L,
}

impl<'l, L: CategoryLookup + ?Sized> Scanner<'l, L> {
    pub fn new(lookup: &'l L) -> Self {
        Self { lookup }
    }

    /// Returns every boundary offset of `input`, in code units.
    ///
    /// For non-empty input the result is strictly increasing, starts at 0
    /// and ends at the input length. Empty input has no boundaries.
    pub fn scan<S: CodeUnits + ?Sized>(&self, input: &S) -> Vec<usize> {
        let mut state = ScanState::new();

        for decoded in Decoder::new(input) {
            let category = self.lookup.category(decoded.codepoint);
            state.window.shift(Neighbor::from(category));
            if !state.window.c3.is_edge() {
                state.step(decoded.offset);
            }
        }

        let end = input.unit_len();
        state.window.shift(Neighbor::Edge);
        state.step(end);
        state.window.shift(Neighbor::Edge);
        state.step(end);

        trace!(
            units = end,
            boundaries = state.boundaries.len(),
            "scanned word boundaries"
        );
        state.boundaries
    }
}

/// Mutable state of one scan.
#[derive(Debug)]
struct ScanState {
    window: Window,
    /// Offset of the boundary between c2 and c3.
    pending: usize,
    boundaries: Vec<usize>,
}

impl ScanState {
    fn new() -> Self {
        Self {
            window: Window::new(),
            pending: 0,
            boundaries: Vec::new(),
        }
    }

    /// Applies the classifier at `pending`, then moves `pending` to
    /// `next`, the offset of the character now in c4.
    fn step(&mut self, next: usize) {
        if self.window.straddles_text() {
            match self.window.classify() {
                Operation::Break => self.boundaries.push(self.pending),
                Operation::NoBreak => {}
                Operation::SkipRight => self.window.collapse(),
            }
        }
        self.pending = next;
    }
}
