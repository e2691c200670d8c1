//! Bidirectional middle-snake search.
//!
//! Runs a forward search from a rectangle's top-left corner and a backward
//! search from its bottom-right corner, one round each per distance `d`,
//! until the two fronts meet on a diagonal. The snake at the meeting point
//! lies on a shortest edit path, which lets the caller split the rectangle
//! in two without keeping the whole path in memory.

use crate::error::DiffError;
use crate::frontier::{Frontier, Point, Trace};
use crate::rect::{Position, Rect};
use crate::snake::{backward_extend, forward_extend};
use crate::view::SequenceView;
use tracing::trace;

/// A snake on a shortest path through a rectangle, in forward orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiddleSnake {
    /// First point of the matched run
    pub start: Position,
    /// Point just past the matched run
    pub end: Position,
    /// Edit distance of the whole rectangle
    pub cost: usize,
}

impl MiddleSnake {
    pub fn len(&self) -> usize {
        self.end.old - self.start.old
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchOutcome {
    /// One side of the rectangle is empty
    Trivial,
    Found(MiddleSnake),
    /// The configured round cap ran out first
    Exhausted { rounds: usize },
}

/// Search state for one rectangle, dropped when the search returns
struct Searcher<'v, 'a, T, U, F> {
    view: &'v SequenceView<'a, T, U, F>,
    rect: &'v Rect,
    n: isize,
    m: isize,
    forward: Frontier,
    backward: Frontier,
}

impl<'v, 'a, T, U, F> Searcher<'v, 'a, T, U, F>
where
    F: Fn(&T, &U) -> bool,
{
    fn absolute(&self, p: Point) -> Option<Position> {
        if p.x < 0 || p.y < 0 || p.x > self.n || p.y > self.m {
            return None;
        }
        Some(Position::new(
            self.rect.old.start + p.x as usize,
            self.rect.new.start + p.y as usize,
        ))
    }

    fn relative(&self, pos: Position) -> Point {
        Point::new(
            (pos.old - self.rect.old.start) as isize,
            (pos.new - self.rect.new.start) as isize,
        )
    }

    fn slide_forward(&self, p: Point) -> Point {
        match self.absolute(p) {
            Some(at) => self.relative(forward_extend(self.view, at, self.rect.end())),
            None => p,
        }
    }

    fn slide_backward(&self, p: Point) -> Point {
        match self.absolute(p) {
            Some(at) => self.relative(backward_extend(self.view, at, self.rect.start())),
            None => p,
        }
    }

    fn unreachable(&self, rounds: usize) -> DiffError {
        DiffError::Unreachable {
            rounds,
            old: self.rect.old.clone(),
            new: self.rect.new.clone(),
        }
    }

    fn snake(
        &self,
        start: Point,
        end: Point,
        cost: isize,
        d: isize,
    ) -> Result<MiddleSnake, DiffError> {
        match (self.absolute(start), self.absolute(end)) {
            (Some(start), Some(end)) => Ok(MiddleSnake {
                start,
                end,
                cost: cost as usize,
            }),
            _ => Err(self.unreachable(d as usize + 1)),
        }
    }

    /// One forward round. Overlap is only tested when the rectangle's
    /// diagonal offset is odd, since only then can the shortest path's
    /// midpoint be reached first by the forward pass.
    fn forward_round(&mut self, d: isize, odd: bool) -> Result<Option<MiddleSnake>, DiffError> {
        for k in self.forward.diagonals(d) {
            let trace = if d == 0 {
                let origin = Point::new(0, 0);
                Trace::seed(origin, self.slide_forward(origin))
            } else {
                let (from, start) = self
                    .forward
                    .forward_candidate(k)
                    .ok_or_else(|| self.unreachable(d as usize))?;
                Trace {
                    from,
                    start,
                    end: self.slide_forward(start),
                }
            };
            self.forward.set(k, trace);

            if odd && self.backward.covers(k, d - 1) {
                if let Some(back) = self.backward.get(k) {
                    if trace.end.x >= back.end.x {
                        trace!(d, k, from = ?trace.from, "fronts met going forward");
                        return self.snake(trace.start, trace.end, 2 * d - 1, d).map(Some);
                    }
                }
            }
        }
        Ok(None)
    }

    fn backward_round(&mut self, d: isize, odd: bool) -> Result<Option<MiddleSnake>, DiffError> {
        for k in self.backward.diagonals(d) {
            let trace = if d == 0 {
                let corner = Point::new(self.n, self.m);
                Trace::seed(corner, self.slide_backward(corner))
            } else {
                let (from, start) = self
                    .backward
                    .backward_candidate(k)
                    .ok_or_else(|| self.unreachable(d as usize))?;
                Trace {
                    from,
                    start,
                    end: self.slide_backward(start),
                }
            };
            self.backward.set(k, trace);

            if !odd && self.forward.covers(k, d) {
                if let Some(fwd) = self.forward.get(k) {
                    if fwd.end.x >= trace.end.x {
                        trace!(d, k, from = ?trace.from, "fronts met going backward");
                        return self.snake(trace.end, trace.start, 2 * d, d).map(Some);
                    }
                }
            }
        }
        Ok(None)
    }
}

/// Find the middle snake of `rect`.
///
/// The rectangle's first and last element pairs are expected to differ
/// (the divider strips common prefixes and suffixes first); otherwise a
/// returned snake may span the whole rectangle.
pub(crate) fn middle_snake<T, U, F>(
    view: &SequenceView<'_, T, U, F>,
    rect: &Rect,
    max_rounds: Option<usize>,
) -> Result<SearchOutcome, DiffError>
where
    F: Fn(&T, &U) -> bool,
{
    if rect.is_trivial() {
        return Ok(SearchOutcome::Trivial);
    }

    let n = rect.old_len() as isize;
    let m = rect.new_len() as isize;
    let delta = n - m;
    let odd = delta & 1 == 1;
    let bound = rect.round_bound();
    let radius = bound as isize + 1;

    let mut searcher = Searcher {
        view,
        rect,
        n,
        m,
        forward: Frontier::new(0, radius),
        backward: Frontier::new(delta, radius),
    };

    for d in 0..bound {
        if max_rounds.is_some_and(|limit| d >= limit) {
            return Ok(SearchOutcome::Exhausted { rounds: d });
        }
        let d = d as isize;
        if let Some(snake) = searcher.forward_round(d, odd)? {
            return Ok(SearchOutcome::Found(snake));
        }
        if let Some(snake) = searcher.backward_round(d, odd)? {
            return Ok(SearchOutcome::Found(snake));
        }
    }

    Err(searcher.unreachable(bound))
}
