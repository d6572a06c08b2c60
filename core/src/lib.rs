//! Normalization of NYT crossword payloads.
//!
//! The provider sends clues and cells as bare lists with no identifiers.
//! Ids are taken from list positions, black squares (`{}`) are dropped from
//! the cell mapping, and each clue's answer is spelled out from the cells it
//! spans.

pub mod cell;
pub mod clue;
pub mod enrich;
pub mod payload;
pub mod puzzle;

mod error;
pub use error::{EntryKind, NormalizeError};

pub use cell::{Cell, CellsById};
pub use clue::Clue;
pub use payload::{Payload, PayloadBody};
pub use puzzle::{Puzzle, normalize, normalize_str, normalize_value};

/// Stands in for a letter whose cell is missing from the grid.
pub const PLACEHOLDER: char = '_';
