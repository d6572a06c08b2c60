use crate::cell::{Cell, CellsById, extract_cells};
use crate::clue::{Clue, extract_clues};
use crate::enrich::enrich_clues;
use crate::{NormalizeError, Payload};
use serde::{Deserialize, Serialize};

/// A normalized puzzle document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: i64,
    pub publication_date: String,
    pub clues: Vec<Clue>,
    pub cells: CellsById,
}

impl Puzzle {
    pub fn clue(&self, id: u32) -> Option<&Clue> {
        self.clues.get(id as usize)
    }

    pub fn cell(&self, id: u32) -> Option<&Cell> {
        self.cells.get(&id)
    }

    /// Clues passing through the given cell, in the order the cell lists them.
    ///
    /// Clue ids the puzzle does not have are skipped.
    pub fn clues_for_cell(&self, cell_id: u32) -> Vec<&Clue> {
        self.cell(cell_id)
            .map(|cell| {
                cell.clue_location_ids
                    .iter()
                    .filter_map(|&id| u32::try_from(id).ok().and_then(|id| self.clue(id)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Clues with at least one cell that could not be resolved.
    pub fn unresolved_clues(&self) -> Vec<&Clue> {
        self.clues.iter().filter(|c| c.is_unresolved()).collect()
    }

    pub fn to_json_pretty(&self) -> Result<String, NormalizeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Normalize a provider payload into a [`Puzzle`].
///
/// Runs clue extraction, cell extraction and answer enrichment in that
/// order. The first error aborts the run.
pub fn normalize(payload: &Payload) -> Result<Puzzle, NormalizeError> {
    let id = payload
        .id
        .ok_or_else(|| NormalizeError::Structure("missing `id`".to_string()))?;
    let publication_date = payload
        .publication_date
        .clone()
        .ok_or_else(|| NormalizeError::Structure("missing `publicationDate`".to_string()))?;
    let body = payload
        .body
        .as_deref()
        .ok_or_else(|| NormalizeError::Structure("missing `body`".to_string()))?
        .first()
        .ok_or_else(|| NormalizeError::Structure("`body` is empty".to_string()))?;

    let clue_entries = body
        .clues
        .as_deref()
        .ok_or_else(|| NormalizeError::Structure("missing `body[0].clues`".to_string()))?;
    let cell_entries = body
        .cells
        .as_deref()
        .ok_or_else(|| NormalizeError::Structure("missing `body[0].cells`".to_string()))?;

    let clues = extract_clues(clue_entries)?;
    let cells = extract_cells(cell_entries)?;
    let clues = enrich_clues(clues, &cells);

    tracing::debug!(id, clues = clues.len(), cells = cells.len(), "normalized puzzle");

    Ok(Puzzle {
        id,
        publication_date,
        clues,
        cells,
    })
}

/// Decode a JSON value as a payload and normalize it.
pub fn normalize_value(value: serde_json::Value) -> Result<Puzzle, NormalizeError> {
    normalize(&Payload::from_value(value)?)
}

/// Parse JSON text as a payload and normalize it.
pub fn normalize_str(s: &str) -> Result<Puzzle, NormalizeError> {
    normalize(&Payload::from_json_str(s)?)
}
