use crate::error::ExternalError;
use crossnorm_core::Puzzle;
use serde::Serialize;
use std::{fs::File, path::Path};

#[derive(Serialize)]
struct ClueRow<'a> {
    id: u32,
    name: &'a str,
    text: &'a str,
    complete_answer: &'a str,
}

/// Write the puzzle's clues as CSV, one row per clue in puzzle order.
pub fn export_clue_sheet<P: AsRef<Path>>(puzzle: &Puzzle, path: P) -> Result<(), ExternalError> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    for clue in &puzzle.clues {
        writer.serialize(ClueRow {
            id: clue.id,
            name: &clue.name,
            text: &clue.text,
            complete_answer: &clue.complete_answer,
        })?;
    }

    writer.flush()?;
    Ok(())
}
