//! Error types for edit script computation

use std::fmt;
use std::ops::Range;
use thiserror::Error;

use crate::config::ConfigError;

/// Which of the two input sequences an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Old => f.write_str("old"),
            Side::New => f.write_str("new"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error("missing {0} sequence")]
    InvalidInput(Side),
    #[error(
        "no middle snake found within {rounds} rounds for old[{}..{}] x new[{}..{}]",
        .old.start, .old.end, .new.start, .new.end
    )]
    Unreachable {
        rounds: usize,
        old: Range<usize>,
        new: Range<usize>,
    },
    #[error(
        "search limit of {limit} exceeded for old[{}..{}] x new[{}..{}]",
        .old.start, .old.end, .new.start, .new.end
    )]
    LimitExceeded {
        limit: usize,
        old: Range<usize>,
        new: Range<usize>,
    },
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
