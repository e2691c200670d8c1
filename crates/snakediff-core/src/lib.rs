//! Snakediff Core - minimal edit scripts in linear space
//!
//! This library computes the shortest edit script between two sequences by
//! searching the edit graph from both corners at once and splitting each
//! problem around the "middle snake" where the two searches meet.
//!
//! ```
//! use snakediff_core::{diff, EditKind};
//!
//! let script = diff(b"ABCABBA", b"CBABAC").unwrap();
//! assert_eq!(script.distance(), 5);
//! assert_eq!(script.matches(), 4);
//! assert!(script.runs().iter().any(|run| run.kind == EditKind::Match));
//! ```

pub mod change;
pub mod config;
mod divide;
pub mod engine;
pub mod error;
mod frontier;
pub mod rect;
pub mod script;
mod search;
pub mod snake;
pub mod text;
pub mod view;

pub use change::{ChangeKind, ChangeSpan};
pub use config::{ConfigError, DiffConfig, DiffConfigBuilder, LimitBehavior};
pub use engine::{DiffEngine, DiffRequest, TextDiff};
pub use error::{DiffError, Side};
pub use rect::Position;
pub use script::{Change, EditKind, EditRun, EditScript, EditStep};
pub use text::{tokenize, Granularity};
pub use view::SequenceView;

/// Compute the minimal edit script turning `old` into `new`
pub fn diff<T: PartialEq>(old: &[T], new: &[T]) -> Result<EditScript, DiffError> {
    DiffEngine::new().diff(old, new)
}

/// Like [`diff`], comparing elements with `eq`
pub fn diff_by<T, U, F>(old: &[T], new: &[U], eq: F) -> Result<EditScript, DiffError>
where
    F: Fn(&T, &U) -> bool,
{
    DiffEngine::new().diff_by(old, new, eq)
}
