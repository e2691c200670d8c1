//! Change representation for text diffs

use serde::{Deserialize, Serialize};

/// The kind of change in a text diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Content was added
    Insert,
    /// Content was removed
    Delete,
    /// Content is unchanged
    Equal,
}

/// A span of text with one change kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSpan {
    pub kind: ChangeKind,
    /// Old content for Delete and Equal, new content for Insert
    pub text: String,
    /// 1-based line in the old text where the span starts
    pub old_line: Option<usize>,
    /// 1-based line in the new text where the span starts
    pub new_line: Option<usize>,
}

impl ChangeSpan {
    pub fn new(kind: ChangeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            old_line: None,
            new_line: None,
        }
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(ChangeKind::Insert, text)
    }

    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(ChangeKind::Delete, text)
    }

    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(ChangeKind::Equal, text)
    }

    pub fn with_lines(mut self, old_line: Option<usize>, new_line: Option<usize>) -> Self {
        self.old_line = old_line;
        self.new_line = new_line;
        self
    }

    /// Check if this is an actual change (not just context)
    pub fn is_change(&self) -> bool {
        self.kind != ChangeKind::Equal
    }
}
