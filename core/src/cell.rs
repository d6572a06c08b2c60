use crate::payload::{RawCell, decode_entry};
use crate::{EntryKind, NormalizeError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A playable grid square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Position of the cell in the payload's cell list.
    pub id: u32,
    /// Letter in this square. Rebus squares hold more than one character.
    pub answer: String,
    /// Clues that pass through this square.
    pub clue_location_ids: Vec<i64>,
}

/// Playable cells keyed by id. Black squares have no entry.
pub type CellsById = BTreeMap<u32, Cell>;

/// Whether an entry is the provider's marker for a black square.
///
/// Only the bare `{}` counts; anything else must decode as a full cell.
pub fn is_placeholder(entry: &Value) -> bool {
    entry.as_object().is_some_and(|map| map.is_empty())
}

/// Build the cell mapping from the payload's cell list, skipping black squares.
pub(crate) fn extract_cells(entries: &[Value]) -> Result<CellsById, NormalizeError> {
    let mut cells = CellsById::new();

    for (index, entry) in entries.iter().enumerate() {
        if is_placeholder(entry) {
            tracing::trace!(index, "skipping black square");
            continue;
        }

        let raw: RawCell = decode_entry(EntryKind::Cell, index, entry)?;
        let answer = raw
            .answer
            .ok_or_else(|| NormalizeError::missing(EntryKind::Cell, index, "answer"))?;
        let clue_location_ids = raw
            .clues
            .ok_or_else(|| NormalizeError::missing(EntryKind::Cell, index, "clues"))?;

        let id = index as u32;
        cells.insert(
            id,
            Cell {
                id,
                answer,
                clue_location_ids,
            },
        );
    }

    tracing::debug!(
        count = cells.len(),
        black_squares = entries.len() - cells.len(),
        "extracted cells"
    );
    Ok(cells)
}
