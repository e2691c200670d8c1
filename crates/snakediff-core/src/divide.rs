//! Divide and conquer over middle snakes.
//!
//! Rectangles are processed from an explicit LIFO work list. A split pushes
//! the right half, the snake, and the left half in that order, so tasks pop
//! in rectangle order and the builder receives steps already sorted.

use crate::config::{DiffConfig, LimitBehavior};
use crate::error::DiffError;
use crate::rect::{Position, Rect};
use crate::script::{EditScript, ScriptBuilder};
use crate::search::{middle_snake, SearchOutcome};
use crate::snake::{backward_extend, forward_extend};
use crate::view::SequenceView;
use tracing::{debug, trace};

enum Task {
    Divide { rect: Rect, depth: usize },
    Match { at: Position, len: usize },
}

pub(crate) struct Divider<'v, 'a, T, U, F> {
    view: &'v SequenceView<'a, T, U, F>,
    config: &'v DiffConfig,
    builder: ScriptBuilder,
    pending: Vec<Task>,
}

impl<'v, 'a, T, U, F> Divider<'v, 'a, T, U, F>
where
    F: Fn(&T, &U) -> bool,
{
    pub fn new(view: &'v SequenceView<'a, T, U, F>, config: &'v DiffConfig) -> Self {
        Self {
            view,
            config,
            builder: ScriptBuilder::new(view.old_len(), view.new_len()),
            pending: Vec::new(),
        }
    }

    pub fn run(mut self) -> Result<EditScript, DiffError> {
        let root = Rect::new(0..self.view.old_len(), 0..self.view.new_len());
        self.pending.push(Task::Divide {
            rect: root,
            depth: 0,
        });

        while let Some(task) = self.pending.pop() {
            match task {
                Task::Match { at, len } => self.builder.matched(at, len),
                Task::Divide { rect, depth } => self.divide(rect, depth)?,
            }
        }

        Ok(self.builder.finish())
    }

    fn divide(&mut self, rect: Rect, depth: usize) -> Result<(), DiffError> {
        let start = forward_extend(self.view, rect.start(), rect.end());
        self.builder.matched(rect.start(), start.old - rect.old.start);

        let end = backward_extend(self.view, rect.end(), start);
        let suffix = rect.end().old - end.old;
        if suffix > 0 {
            self.pending.push(Task::Match { at: end, len: suffix });
        }

        let rect = Rect::between(start, end);
        if rect.is_trivial() {
            self.emit_trivial(&rect);
            return Ok(());
        }

        if self.config.max_depth.is_some_and(|limit| depth >= limit) {
            return self.limit_reached(&rect, depth);
        }

        match middle_snake(self.view, &rect, self.config.max_rounds)? {
            SearchOutcome::Found(snake) => {
                trace!(
                    old = ?rect.old,
                    new = ?rect.new,
                    cost = snake.cost,
                    snake = snake.len(),
                    depth,
                    "split"
                );
                self.pending.push(Task::Divide {
                    rect: Rect::between(snake.end, rect.end()),
                    depth: depth + 1,
                });
                if !snake.is_empty() {
                    self.pending.push(Task::Match {
                        at: snake.start,
                        len: snake.len(),
                    });
                }
                self.pending.push(Task::Divide {
                    rect: Rect::between(rect.start(), snake.start),
                    depth: depth + 1,
                });
                Ok(())
            }
            SearchOutcome::Trivial => {
                self.emit_trivial(&rect);
                Ok(())
            }
            SearchOutcome::Exhausted { rounds } => self.limit_reached(&rect, rounds),
        }
    }

    /// Delete whatever is left of old, then insert whatever is left of new
    fn emit_trivial(&mut self, rect: &Rect) {
        self.builder.deleted(rect.start(), rect.old_len());
        self.builder
            .inserted(Position::new(rect.old.end, rect.new.start), rect.new_len());
    }

    fn limit_reached(&mut self, rect: &Rect, limit: usize) -> Result<(), DiffError> {
        match self.config.on_limit_exceeded {
            LimitBehavior::Fallback => {
                debug!(
                    old = ?rect.old,
                    new = ?rect.new,
                    limit,
                    "search limit reached, replacing rectangle"
                );
                self.emit_trivial(rect);
                Ok(())
            }
            LimitBehavior::ReturnError => Err(DiffError::LimitExceeded {
                limit,
                old: rect.old.clone(),
                new: rect.new.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{EditKind, EditRun};

    fn divide(a: &str, b: &str, config: &DiffConfig) -> Result<EditScript, DiffError> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let view = SequenceView::new(&a, &b);
        Divider::new(&view, config).run()
    }

    #[test]
    fn test_prefix_and_suffix_become_matches() {
        let script = divide("abXcd", "abYcd", &DiffConfig::default()).unwrap();
        assert_eq!(
            script.runs(),
            &[
                EditRun::new(EditKind::Match, Position::new(0, 0), 2),
                EditRun::new(EditKind::Insert, Position::new(2, 2), 1),
                EditRun::new(EditKind::Delete, Position::new(2, 3), 1),
                EditRun::new(EditKind::Match, Position::new(3, 3), 2),
            ]
        );
    }

    #[test]
    fn test_pure_insert_and_delete() {
        let script = divide("", "abc", &DiffConfig::default()).unwrap();
        assert_eq!(
            script.runs(),
            &[EditRun::new(EditKind::Insert, Position::new(0, 0), 3)]
        );

        let script = divide("abc", "", &DiffConfig::default()).unwrap();
        assert_eq!(
            script.runs(),
            &[EditRun::new(EditKind::Delete, Position::new(0, 0), 3)]
        );
    }

    #[test]
    fn test_runs_are_contiguous() {
        let script = divide("ABCABBA", "CBABAC", &DiffConfig::default()).unwrap();
        let mut at = Position::new(0, 0);
        for run in script.runs() {
            assert_eq!(run.at, at);
            at = run.end();
        }
        assert_eq!(at, Position::new(7, 6));
        assert_eq!(script.distance(), 5);
    }

    #[test]
    fn test_empty_snake_queues_no_match() {
        let a: Vec<char> = "xy".chars().collect();
        let b: Vec<char> = "yx".chars().collect();
        let view = SequenceView::new(&a, &b);
        let config = DiffConfig::default();
        let mut divider = Divider::new(&view, &config);
        divider.divide(Rect::new(0..1, 0..1), 0).unwrap();
        assert_eq!(divider.pending.len(), 2);
        assert!(divider
            .pending
            .iter()
            .all(|task| matches!(task, Task::Divide { .. })));

        divider.divide(Rect::new(0..2, 0..2), 0).unwrap();
        assert!(divider
            .pending
            .iter()
            .any(|task| matches!(task, Task::Match { len: 1, .. })));
    }

    #[test]
    fn test_depth_limit_falls_back() {
        let config = DiffConfig::builder().max_depth(1).build().unwrap();
        let script = divide("xaybzc", "qarbsc", &config).unwrap();
        let old: Vec<char> = "xaybzc".chars().collect();
        let new: Vec<char> = "qarbsc".chars().collect();
        assert_eq!(script.apply(&old, &new), new);
        // The fallback is valid but no longer minimal
        assert!(script.distance() >= 6);
    }

    #[test]
    fn test_round_limit_errors_when_strict() {
        let config = DiffConfig::builder()
            .max_rounds(1)
            .on_limit_exceeded(LimitBehavior::ReturnError)
            .build()
            .unwrap();
        let err = divide("abcd", "wxyz", &config).unwrap_err();
        assert_eq!(
            err,
            DiffError::LimitExceeded {
                limit: 1,
                old: 0..4,
                new: 0..4,
            }
        );
    }
}
