//! Furthest-reaching frontiers of one search direction.
//!
//! Coordinates are relative to the rectangle's top-left corner and signed,
//! because a candidate step may land just outside the rectangle before it is
//! discarded by the overlap test.

/// Point relative to the rectangle origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Point {
    pub x: isize,
    pub y: isize,
}

impl Point {
    pub fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    pub fn diagonal(self) -> isize {
        self.x - self.y
    }
}

/// The path end stored for one diagonal.
///
/// `from` is the predecessor's end point, `start` is where the edit step
/// landed, and `end` is `start` extended along its snake. In the backward
/// direction `end` is the point closer to the origin.
///
/// Only the latest snake is needed to split a rectangle, so `from` is not
/// followed back through earlier rounds. It is kept to check that every
/// trace starts at most one edit step away from its predecessor, and it is
/// logged when the two fronts meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Trace {
    pub from: Point,
    pub start: Point,
    pub end: Point,
}

impl Trace {
    /// The round-zero trace at a search corner
    pub fn seed(corner: Point, end: Point) -> Self {
        Self {
            from: corner,
            start: corner,
            end,
        }
    }

    /// Whether `start` is the predecessor itself (a seed) or one insert or
    /// delete step away from it
    pub fn is_single_step(&self) -> bool {
        (self.start.x - self.from.x).abs() + (self.start.y - self.from.y).abs() <= 1
    }
}

/// Diagonal-indexed slots covering `center - radius ..= center + radius`.
///
/// A slot is written for the first time in the round whose range reaches it
/// and then once every second round, so reading a neighbour of a diagonal
/// visited in round `d` always yields the value from round `d - 1`.
pub(crate) struct Frontier {
    center: isize,
    radius: isize,
    slots: Vec<Option<Trace>>,
}

impl Frontier {
    pub fn new(center: isize, radius: isize) -> Self {
        Self {
            center,
            radius,
            slots: vec![None; (2 * radius + 1) as usize],
        }
    }

    fn slot(&self, k: isize) -> Option<usize> {
        let offset = k - self.center + self.radius;
        (0..self.slots.len() as isize)
            .contains(&offset)
            .then_some(offset as usize)
    }

    pub fn get(&self, k: isize) -> Option<&Trace> {
        self.slot(k).and_then(|i| self.slots[i].as_ref())
    }

    pub fn set(&mut self, k: isize, trace: Trace) {
        debug_assert_eq!(trace.end.diagonal(), k);
        debug_assert!(
            trace.is_single_step(),
            "a trace starts at most one edit step from its predecessor"
        );
        if let Some(i) = self.slot(k) {
            self.slots[i] = Some(trace);
        }
    }

    /// Diagonals of round `d`, in increasing order
    pub fn diagonals(&self, d: isize) -> impl Iterator<Item = isize> {
        (self.center - d..=self.center + d).step_by(2)
    }

    /// Whether diagonal `k` lies within the range searched by round `d`
    pub fn covers(&self, k: isize, d: isize) -> bool {
        (k - self.center).abs() <= d
    }

    /// Forward candidate for diagonal `k`: the delete step from `k - 1` or
    /// the insert step from `k + 1`, whichever lands on the larger x. Ties
    /// go to the insert step.
    pub fn forward_candidate(&self, k: isize) -> Option<(Point, Point)> {
        match (self.get(k - 1), self.get(k + 1)) {
            (Some(lower), Some(upper)) if lower.end.x < upper.end.x => {
                Some((upper.end, Point::new(upper.end.x, upper.end.y + 1)))
            }
            (Some(lower), _) => Some((lower.end, Point::new(lower.end.x + 1, lower.end.y))),
            (None, Some(upper)) => Some((upper.end, Point::new(upper.end.x, upper.end.y + 1))),
            (None, None) => None,
        }
    }

    /// Backward candidate for diagonal `k`: the reverse insert step from
    /// `k - 1` or the reverse delete step from `k + 1`, whichever lands on
    /// the smaller x. Ties go to the reverse insert step.
    pub fn backward_candidate(&self, k: isize) -> Option<(Point, Point)> {
        match (self.get(k - 1), self.get(k + 1)) {
            (Some(lower), Some(upper)) if lower.end.x < upper.end.x => {
                Some((lower.end, Point::new(lower.end.x, lower.end.y - 1)))
            }
            (_, Some(upper)) => Some((upper.end, Point::new(upper.end.x - 1, upper.end.y))),
            (Some(lower), None) => Some((lower.end, Point::new(lower.end.x, lower.end.y - 1))),
            (None, None) => None,
        }
    }
}
