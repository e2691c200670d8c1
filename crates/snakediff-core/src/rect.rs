//! Points and rectangles of the edit graph

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A point `(i, j)` of the edit graph: `old` elements of A and `new`
/// elements of B have been consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub old: usize,
    pub new: usize,
}

impl Position {
    pub fn new(old: usize, new: usize) -> Self {
        Self { old, new }
    }

    /// Move `len` steps along the diagonal
    pub fn advance(self, len: usize) -> Self {
        Self::new(self.old + len, self.new + len)
    }
}

/// The sub-problem `old[i1..i2] x new[j1..j2]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rect {
    pub old: Range<usize>,
    pub new: Range<usize>,
}

impl Rect {
    pub fn new(old: Range<usize>, new: Range<usize>) -> Self {
        Self { old, new }
    }

    /// Rectangle spanned by two corner points
    pub fn between(start: Position, end: Position) -> Self {
        Self::new(start.old..end.old, start.new..end.new)
    }

    pub fn start(&self) -> Position {
        Position::new(self.old.start, self.new.start)
    }

    pub fn end(&self) -> Position {
        Position::new(self.old.end, self.new.end)
    }

    pub fn old_len(&self) -> usize {
        self.old.len()
    }

    pub fn new_len(&self) -> usize {
        self.new.len()
    }

    /// One side is empty, so the only script is all deletes or all inserts
    pub fn is_trivial(&self) -> bool {
        self.old.is_empty() || self.new.is_empty()
    }

    /// Upper bound on the rounds a search of this rectangle can take
    pub fn round_bound(&self) -> usize {
        (self.old_len() + self.new_len()).div_ceil(2) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial() {
        assert!(Rect::new(0..0, 0..3).is_trivial());
        assert!(Rect::new(2..5, 4..4).is_trivial());
        assert!(!Rect::new(0..1, 0..1).is_trivial());
    }

    #[test]
    fn test_round_bound() {
        assert_eq!(Rect::new(0..7, 0..6).round_bound(), 8);
        assert_eq!(Rect::new(0..1, 0..1).round_bound(), 2);
    }

    #[test]
    fn test_between() {
        let rect = Rect::between(Position::new(1, 2), Position::new(4, 3));
        assert_eq!(rect.old, 1..4);
        assert_eq!(rect.new, 2..3);
        assert_eq!(rect.start(), Position::new(1, 2));
        assert_eq!(rect.end(), Position::new(4, 3));
    }
}
