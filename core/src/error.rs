use std::fmt;
use thiserror::Error;

/// Which payload list an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Clue,
    Cell,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Clue => write!(f, "clue"),
            EntryKind::Cell => write!(f, "cell"),
        }
    }
}

/// Errors raised while normalizing a payload.
///
/// Every variant aborts the run; there is no partial document.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Invalid payload structure: {0}")]
    Structure(String),
    #[error("{kind} entry {index} is missing required field `{field}`")]
    MissingField {
        kind: EntryKind,
        index: usize,
        field: &'static str,
    },
    #[error("clue entry {index} has an empty `text` list")]
    EmptyText { index: usize },
    #[error("{kind} entry {index} is malformed: {reason}")]
    MalformedEntry {
        kind: EntryKind,
        index: usize,
        reason: String,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NormalizeError {
    pub(crate) fn missing(kind: EntryKind, index: usize, field: &'static str) -> Self {
        NormalizeError::MissingField { kind, index, field }
    }

    pub(crate) fn malformed(kind: EntryKind, index: usize, reason: impl Into<String>) -> Self {
        NormalizeError::MalformedEntry {
            kind,
            index,
            reason: reason.into(),
        }
    }
}
