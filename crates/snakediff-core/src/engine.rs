//! Diff computation engine

use crate::change::ChangeSpan;
use crate::config::DiffConfig;
use crate::divide::Divider;
use crate::error::{DiffError, Side};
use crate::script::{Change, EditScript};
use crate::text::{tokenize, Granularity};
use crate::view::SequenceView;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

/// Result of a text diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDiff {
    pub granularity: Granularity,
    /// All spans in order, deletions before insertions within a change
    pub spans: Vec<ChangeSpan>,
    /// Number of inserted tokens
    pub insertions: usize,
    /// Number of deleted tokens
    pub deletions: usize,
}

impl TextDiff {
    pub fn has_changes(&self) -> bool {
        self.insertions + self.deletions > 0
    }

    /// Only the spans that are actual changes
    pub fn changes(&self) -> impl Iterator<Item = &ChangeSpan> {
        self.spans.iter().filter(|s| s.is_change())
    }
}

/// The main diff engine
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    config: DiffConfig,
    /// Token size used by the text methods
    granularity: Granularity,
}

impl DiffEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: DiffConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Compute the edit script between two sequences using `==`
    pub fn diff<T: PartialEq>(&self, old: &[T], new: &[T]) -> Result<EditScript, DiffError> {
        self.diff_by(old, new, |a: &T, b: &T| a == b)
    }

    /// Compute the edit script with a caller-supplied equality test
    pub fn diff_by<T, U, F>(&self, old: &[T], new: &[U], eq: F) -> Result<EditScript, DiffError>
    where
        F: Fn(&T, &U) -> bool,
    {
        self.config.validate()?;
        let _span = debug_span!("diff", old_len = old.len(), new_len = new.len()).entered();

        let view = SequenceView::with_eq(old, new, eq);
        let script = Divider::new(&view, &self.config).run()?;

        debug!(
            distance = script.distance(),
            matches = script.matches(),
            runs = script.runs().len(),
            "diff complete"
        );
        Ok(script)
    }

    /// Compute a line-level diff between two strings
    pub fn diff_strings(&self, old: &str, new: &str) -> Result<TextDiff, DiffError> {
        self.diff_tokens(old, new, Granularity::Lines)
    }

    /// Compute a diff between two strings at the engine's granularity
    pub fn diff_text(&self, old: &str, new: &str) -> Result<TextDiff, DiffError> {
        self.diff_tokens(old, new, self.granularity)
    }

    fn diff_tokens(
        &self,
        old: &str,
        new: &str,
        granularity: Granularity,
    ) -> Result<TextDiff, DiffError> {
        let old_tokens = tokenize(old, granularity);
        let new_tokens = tokenize(new, granularity);
        let script = self.diff(&old_tokens, &new_tokens)?;

        let mut spans = SpanCollector::new(granularity);
        for change in script.changes(&old_tokens, &new_tokens) {
            match change {
                Change::Match(token, _) => spans.equal(token),
                Change::Delete(token) => spans.delete(token),
                Change::Insert(token) => spans.insert(token),
            }
        }
        spans.flush_pending();

        Ok(TextDiff {
            granularity,
            spans: spans.spans,
            insertions: script.insertions(),
            deletions: script.deletions(),
        })
    }
}

/// Turns token-level changes into spans, tracking line numbers and holding
/// back a change block until it ends so its deletions can go first
struct SpanCollector {
    granularity: Granularity,
    spans: Vec<ChangeSpan>,
    pending_deletes: Vec<(String, usize)>,
    pending_inserts: Vec<(String, usize)>,
    old_line: usize,
    new_line: usize,
}

fn newlines(token: &str) -> usize {
    token.bytes().filter(|&b| b == b'\n').count()
}

impl SpanCollector {
    fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            spans: Vec::new(),
            pending_deletes: Vec::new(),
            pending_inserts: Vec::new(),
            old_line: 1,
            new_line: 1,
        }
    }

    fn text(&self, token: &str) -> String {
        match self.granularity {
            Granularity::Lines => token.trim_end_matches('\n').to_string(),
            _ => token.to_string(),
        }
    }

    fn equal(&mut self, token: &str) {
        self.flush_pending();
        let span = ChangeSpan::equal(self.text(token))
            .with_lines(Some(self.old_line), Some(self.new_line));
        self.push(span);
        self.old_line += newlines(token);
        self.new_line += newlines(token);
    }

    fn delete(&mut self, token: &str) {
        self.pending_deletes.push((self.text(token), self.old_line));
        self.old_line += newlines(token);
    }

    fn insert(&mut self, token: &str) {
        self.pending_inserts.push((self.text(token), self.new_line));
        self.new_line += newlines(token);
    }

    fn flush_pending(&mut self) {
        for (text, line) in std::mem::take(&mut self.pending_deletes) {
            self.push(ChangeSpan::delete(text).with_lines(Some(line), None));
        }
        for (text, line) in std::mem::take(&mut self.pending_inserts) {
            self.push(ChangeSpan::insert(text).with_lines(None, Some(line)));
        }
    }

    /// Line spans stay one per line; finer spans merge with a neighbour of
    /// the same kind
    fn push(&mut self, span: ChangeSpan) {
        if self.granularity != Granularity::Lines {
            if let Some(last) = self.spans.last_mut() {
                if last.kind == span.kind {
                    last.text.push_str(&span.text);
                    return;
                }
            }
        }
        self.spans.push(span);
    }
}

/// A diff whose sides are supplied separately and may be missing
pub struct DiffRequest<'a, T> {
    old: Option<&'a [T]>,
    new: Option<&'a [T]>,
}

impl<T> Default for DiffRequest<'_, T> {
    fn default() -> Self {
        Self {
            old: None,
            new: None,
        }
    }
}

impl<'a, T: PartialEq> DiffRequest<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_old(mut self, old: &'a [T]) -> Self {
        self.old = Some(old);
        self
    }

    pub fn with_new(mut self, new: &'a [T]) -> Self {
        self.new = Some(new);
        self
    }

    /// Run the request; both sides must have been supplied
    pub fn run(&self, engine: &DiffEngine) -> Result<EditScript, DiffError> {
        let old = self.old.ok_or(DiffError::InvalidInput(Side::Old))?;
        let new = self.new.ok_or(DiffError::InvalidInput(Side::New))?;
        engine.diff(old, new)
    }
}
