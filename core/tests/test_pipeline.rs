use crossnorm_core::{EntryKind, NormalizeError, Payload, normalize, normalize_str, normalize_value};
use serde_json::{Value, json};

const MINI: &str = include_str!("data/nyt_mini.json");

fn single_clue_payload(cells: Value) -> Value {
    json!({
        "id": 1,
        "publicationDate": "2024-01-01",
        "body": [{
            "clues": [{
                "label": "1",
                "direction": "Across",
                "text": [{ "plain": "Greeting" }],
                "cells": [0, 1]
            }],
            "cells": cells
        }]
    })
}

#[test]
fn test_mini_puzzle() {
    let puzzle = normalize_str(MINI).unwrap();

    assert_eq!(puzzle.id, 21937);
    assert_eq!(puzzle.publication_date, "2024-05-14");

    let answers: Vec<_> = puzzle
        .clues
        .iter()
        .map(|c| (c.name.as_str(), c.complete_answer.as_str()))
        .collect();
    assert_eq!(
        answers,
        vec![
            ("1 Across", "AT"),
            ("3 Across", "ARE"),
            ("4 Across", "TE"),
            ("1 Down", "ARE"),
            ("2 Down", "TE"),
            ("3 Down", "AT"),
        ]
    );

    assert_eq!(
        puzzle.cells.keys().copied().collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5, 6, 7]
    );
    assert!(puzzle.unresolved_clues().is_empty());
}

#[test]
fn test_answer_length_matches_cells() {
    let puzzle = normalize_str(MINI).unwrap();
    for clue in &puzzle.clues {
        assert_eq!(
            clue.complete_answer.chars().count(),
            clue.cell_ids.len(),
            "{}",
            clue.name
        );
    }
}

#[test]
fn test_cell_keys_match_ids() {
    let puzzle = normalize_str(MINI).unwrap();
    for (key, cell) in &puzzle.cells {
        assert_eq!(*key, cell.id);
    }
}

#[test]
fn test_cell_count_excludes_placeholders() {
    let raw: Value = serde_json::from_str(MINI).unwrap();
    let entries = raw["body"][0]["cells"].as_array().unwrap();
    let playable = entries.iter().filter(|e| *e != &json!({})).count();

    let puzzle = normalize_value(raw.clone()).unwrap();
    assert_eq!(puzzle.cells.len(), playable);
    assert_eq!(playable, 7);
}

#[test]
fn test_normalize_is_idempotent() {
    let payload: Payload = serde_json::from_str(MINI).unwrap();

    let first = serde_json::to_string_pretty(&normalize(&payload).unwrap()).unwrap();
    let second = serde_json::to_string_pretty(&normalize(&payload).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_complete_grid_answer() {
    let puzzle = normalize_value(single_clue_payload(json!([
        { "answer": "H", "clues": [0] },
        { "answer": "I", "clues": [0] }
    ])))
    .unwrap();

    assert_eq!(puzzle.clues.len(), 1);
    assert_eq!(puzzle.clues[0].name, "1 Across");
    assert_eq!(puzzle.clues[0].text, "Greeting");
    assert_eq!(puzzle.clues[0].complete_answer, "HI");
}

#[test]
fn test_black_square_in_answer() {
    let puzzle = normalize_value(single_clue_payload(json!([
        {},
        { "answer": "I", "clues": [0] }
    ])))
    .unwrap();

    assert_eq!(puzzle.clues[0].complete_answer, "_I");
    assert_eq!(puzzle.cells.keys().copied().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_black_square_leaves_gap_in_ids() {
    let puzzle = normalize_value(single_clue_payload(json!([
        { "answer": "H", "clues": [0] },
        {},
        { "answer": "Y", "clues": [] }
    ])))
    .unwrap();

    assert_eq!(puzzle.cells.keys().copied().collect::<Vec<_>>(), vec![0, 2]);
    assert!(!puzzle.cells.contains_key(&1));
}

#[test]
fn test_cell_ids_outside_the_grid() {
    for (ids, expected) in [(json!([-1, 0]), "_I"), (json!([0, 5_000_000_000_i64]), "I_")] {
        let mut payload = single_clue_payload(json!([{ "answer": "I", "clues": [0] }]));
        payload["body"][0]["clues"][0]["cells"] = ids;

        let puzzle = normalize_value(payload).unwrap();
        assert_eq!(puzzle.clues[0].complete_answer, expected);
    }
}

#[test]
fn test_body_of_wrong_type_is_structure_error() {
    let err = normalize_str(r#"{ "id": 1, "publicationDate": "d", "body": {} }"#).unwrap_err();
    assert!(matches!(err, NormalizeError::Structure(_)));
}

#[test]
fn test_clue_without_cells_aborts() {
    let mut payload = single_clue_payload(json!([{ "answer": "H", "clues": [0] }]));
    payload["body"][0]["clues"][0]
        .as_object_mut()
        .unwrap()
        .remove("cells");

    match normalize_value(payload) {
        Err(NormalizeError::MissingField { kind, index, field }) => {
            assert_eq!(kind, EntryKind::Clue);
            assert_eq!(index, 0);
            assert_eq!(field, "cells");
        }
        other => panic!("expected a missing field error, got {other:?}"),
    }
}

#[test]
fn test_malformed_cell_aborts() {
    let err = normalize_value(single_clue_payload(json!([
        { "answer": "H", "clues": [0] },
        "I"
    ])))
    .unwrap_err();

    assert!(matches!(
        err,
        NormalizeError::MalformedEntry { kind: EntryKind::Cell, index: 1, .. }
    ));
    assert_eq!(
        err.to_string(),
        "cell entry 1 is malformed: expected an object, got a string"
    );
}

#[test]
fn test_document_round_trip() {
    let puzzle = normalize_str(MINI).unwrap();
    let json = puzzle.to_json_pretty().unwrap();

    let value: Value = serde_json::from_str(&json).unwrap();
    assert!(value["cells"].get("0").is_none());
    assert_eq!(value["cells"]["4"]["clue_location_ids"], json!([1, 3]));

    let restored: crossnorm_core::Puzzle = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, puzzle);
}
