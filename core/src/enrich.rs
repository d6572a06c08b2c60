use crate::PLACEHOLDER;
use crate::cell::CellsById;
use crate::clue::{Clue, PendingClue};

/// Fill in each clue's answer from the letters of the cells it spans.
///
/// A referenced cell that does not exist (black square or out of range)
/// contributes [`PLACEHOLDER`]. This never fails.
pub(crate) fn enrich_clues(clues: Vec<PendingClue>, cells: &CellsById) -> Vec<Clue> {
    clues
        .into_iter()
        .map(|clue| {
            let answer = assemble_answer(&clue.cell_ids, cells);
            if answer.contains(PLACEHOLDER) {
                tracing::debug!(clue = %clue.name, answer = %answer, "clue references missing cells");
            }
            clue.with_answer(answer)
        })
        .collect()
}

/// Concatenate the answers of `cell_ids` in order.
///
/// Ids outside the grid's id range, negative ones included, resolve to no cell.
pub fn assemble_answer(cell_ids: &[i64], cells: &CellsById) -> String {
    let mut answer = String::with_capacity(cell_ids.len());
    for &id in cell_ids {
        match u32::try_from(id).ok().and_then(|k| cells.get(&k)) {
            Some(cell) => answer.push_str(&cell.answer),
            None => answer.push(PLACEHOLDER),
        }
    }
    answer
}
