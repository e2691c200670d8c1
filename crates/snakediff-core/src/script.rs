//! Edit scripts and the builder that assembles them

use crate::rect::Position;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// The kind of a single edit step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    /// The elements at both positions are equal and kept
    Match,
    /// An element of the old sequence is removed
    Delete,
    /// An element of the new sequence is added
    Insert,
}

/// One step of an edit script, tagged with the position it starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditStep {
    pub kind: EditKind,
    pub at: Position,
}

impl EditStep {
    /// Position after taking this step
    pub fn end(&self) -> Position {
        match self.kind {
            EditKind::Match => self.at.advance(1),
            EditKind::Delete => Position::new(self.at.old + 1, self.at.new),
            EditKind::Insert => Position::new(self.at.old, self.at.new + 1),
        }
    }
}

/// A run of consecutive steps of the same kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditRun {
    pub kind: EditKind,
    /// Position where the run starts
    pub at: Position,
    pub len: usize,
}

impl EditRun {
    pub fn new(kind: EditKind, at: Position, len: usize) -> Self {
        Self { kind, at, len }
    }

    /// Indices of the old sequence this run consumes
    pub fn old_range(&self) -> Range<usize> {
        match self.kind {
            EditKind::Match | EditKind::Delete => self.at.old..self.at.old + self.len,
            EditKind::Insert => self.at.old..self.at.old,
        }
    }

    /// Indices of the new sequence this run consumes
    pub fn new_range(&self) -> Range<usize> {
        match self.kind {
            EditKind::Match | EditKind::Insert => self.at.new..self.at.new + self.len,
            EditKind::Delete => self.at.new..self.at.new,
        }
    }

    /// Position just past the run
    pub fn end(&self) -> Position {
        Position::new(self.old_range().end, self.new_range().end)
    }

    pub fn steps(&self) -> impl Iterator<Item = EditStep> + '_ {
        (0..self.len).map(move |offset| {
            let at = match self.kind {
                EditKind::Match => self.at.advance(offset),
                EditKind::Delete => Position::new(self.at.old + offset, self.at.new),
                EditKind::Insert => Position::new(self.at.old, self.at.new + offset),
            };
            EditStep {
                kind: self.kind,
                at,
            }
        })
    }

    fn swapped(&self) -> Self {
        let kind = match self.kind {
            EditKind::Match => EditKind::Match,
            EditKind::Delete => EditKind::Insert,
            EditKind::Insert => EditKind::Delete,
        };
        Self::new(kind, Position::new(self.at.new, self.at.old), self.len)
    }
}

/// A complete edit script from an old sequence to a new one
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditScript {
    runs: Vec<EditRun>,
    old_len: usize,
    new_len: usize,
}

/// A step paired with the element it refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change<'a, T, U = T> {
    Match(&'a T, &'a U),
    Delete(&'a T),
    Insert(&'a U),
}

impl EditScript {
    pub fn runs(&self) -> &[EditRun] {
        &self.runs
    }

    pub fn old_len(&self) -> usize {
        self.old_len
    }

    pub fn new_len(&self) -> usize {
        self.new_len
    }

    /// Every step in order
    pub fn steps(&self) -> impl Iterator<Item = EditStep> + '_ {
        self.runs.iter().flat_map(|run| run.steps())
    }

    /// True when the script has no steps at all (both sequences empty)
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    fn count(&self, kind: EditKind) -> usize {
        self.runs
            .iter()
            .filter(|run| run.kind == kind)
            .map(|run| run.len)
            .sum()
    }

    /// Number of matched elements, the length of a longest common subsequence
    pub fn matches(&self) -> usize {
        self.count(EditKind::Match)
    }

    pub fn insertions(&self) -> usize {
        self.count(EditKind::Insert)
    }

    pub fn deletions(&self) -> usize {
        self.count(EditKind::Delete)
    }

    /// Number of non-match steps
    pub fn distance(&self) -> usize {
        self.insertions() + self.deletions()
    }

    /// True when the two sequences compared equal
    pub fn is_identity(&self) -> bool {
        self.distance() == 0
    }

    /// The script from new to old: insert and delete roles swap
    pub fn inverted(&self) -> Self {
        Self {
            runs: self.runs.iter().map(EditRun::swapped).collect(),
            old_len: self.new_len,
            new_len: self.old_len,
        }
    }

    /// Pair every step with its element(s)
    pub fn changes<'a, T, U>(
        &'a self,
        old: &'a [T],
        new: &'a [U],
    ) -> impl Iterator<Item = Change<'a, T, U>> + 'a {
        self.steps().map(move |step| match step.kind {
            EditKind::Match => Change::Match(&old[step.at.old], &new[step.at.new]),
            EditKind::Delete => Change::Delete(&old[step.at.old]),
            EditKind::Insert => Change::Insert(&new[step.at.new]),
        })
    }

    /// Rebuild the new sequence from `old`, taking inserted elements from
    /// `new`. Matched elements are taken from `old`.
    pub fn apply<T: Clone>(&self, old: &[T], new: &[T]) -> Vec<T> {
        let mut out = Vec::with_capacity(self.new_len);
        for run in &self.runs {
            match run.kind {
                EditKind::Match => out.extend_from_slice(&old[run.old_range()]),
                EditKind::Insert => out.extend_from_slice(&new[run.new_range()]),
                EditKind::Delete => {}
            }
        }
        out
    }
}

/// Collects runs in emission order and merges adjacent runs of one kind
#[derive(Debug, Default)]
pub(crate) struct ScriptBuilder {
    runs: Vec<EditRun>,
    old_len: usize,
    new_len: usize,
}

impl ScriptBuilder {
    pub fn new(old_len: usize, new_len: usize) -> Self {
        Self {
            runs: Vec::new(),
            old_len,
            new_len,
        }
    }

    pub fn push(&mut self, run: EditRun) {
        if run.len == 0 {
            return;
        }
        if let Some(last) = self.runs.last_mut() {
            debug_assert_eq!(last.end(), run.at, "runs must be emitted in order");
            if last.kind == run.kind && last.end() == run.at {
                last.len += run.len;
                return;
            }
        }
        self.runs.push(run);
    }

    pub fn matched(&mut self, at: Position, len: usize) {
        self.push(EditRun::new(EditKind::Match, at, len));
    }

    pub fn deleted(&mut self, at: Position, len: usize) {
        self.push(EditRun::new(EditKind::Delete, at, len));
    }

    pub fn inserted(&mut self, at: Position, len: usize) {
        self.push(EditRun::new(EditKind::Insert, at, len));
    }

    pub fn finish(self) -> EditScript {
        EditScript {
            runs: self.runs,
            old_len: self.old_len,
            new_len: self.new_len,
        }
    }
}
