use crate::payload::{RawClue, decode_entry};
use crate::{EntryKind, NormalizeError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A clue with its answer assembled from the cells it spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    /// Position of the clue in the payload's clue list.
    pub id: u32,
    pub text: String,
    /// Grid label and direction, e.g. `"12 Across"`.
    pub name: String,
    /// Spanned cells in solving order, as sent by the provider.
    pub cell_ids: Vec<i64>,
    pub complete_answer: String,
}

impl Clue {
    /// Whether any spanned cell was missing when the answer was built.
    pub fn is_unresolved(&self) -> bool {
        self.complete_answer.contains(crate::PLACEHOLDER)
    }
}

/// A clue before its answer has been filled in.
///
/// Never leaves the crate: the only way to get a [`Clue`] is through
/// [`crate::enrich::enrich_clues`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingClue {
    pub id: u32,
    pub text: String,
    pub name: String,
    pub cell_ids: Vec<i64>,
}

impl PendingClue {
    pub fn with_answer(self, complete_answer: String) -> Clue {
        Clue {
            id: self.id,
            text: self.text,
            name: self.name,
            cell_ids: self.cell_ids,
            complete_answer,
        }
    }
}

/// Build pending clues from the payload's clue list.
///
/// Ids are list positions; the payload carries none of its own.
pub(crate) fn extract_clues(entries: &[Value]) -> Result<Vec<PendingClue>, NormalizeError> {
    let clues = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| extract_clue(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = clues.len(), "extracted clues");
    Ok(clues)
}

fn extract_clue(index: usize, entry: &Value) -> Result<PendingClue, NormalizeError> {
    let raw: RawClue = decode_entry(EntryKind::Clue, index, entry)?;
    let missing = |field| NormalizeError::missing(EntryKind::Clue, index, field);

    let label = raw.label.ok_or_else(|| missing("label"))?;
    let direction = raw.direction.ok_or_else(|| missing("direction"))?;
    let texts = raw.text.ok_or_else(|| missing("text"))?;
    let cell_ids = raw.cells.ok_or_else(|| missing("cells"))?;

    let text = texts
        .into_iter()
        .next()
        .ok_or(NormalizeError::EmptyText { index })?
        .plain
        .ok_or_else(|| missing("text[0].plain"))?;

    Ok(PendingClue {
        id: index as u32,
        text,
        name: format!("{} {}", label, direction),
        cell_ids,
    })
}
