//! Shape of the provider's puzzle response.
//!
//! Only the fields the pipeline reads are modeled; everything else in the
//! response is ignored. Clue and cell entries stay as raw JSON so that each
//! one can be decoded on its own and the empty placeholder `{}` can be told
//! apart from a broken entry.

use crate::{EntryKind, NormalizeError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::error::Category;

/// Top-level puzzle response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(
        rename = "publicationDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub publication_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<PayloadBody>>,
}

/// One grid body. Only the first body of a payload is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayloadBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clues: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<Value>>,
}

impl Payload {
    /// Decode an already parsed payload. Any mismatch is a shape problem.
    pub fn from_value(value: Value) -> Result<Self, NormalizeError> {
        serde_json::from_value(value).map_err(shape_error)
    }

    /// Parse payload text. Text that is not JSON at all stays a `Json` error.
    pub fn from_json_str(s: &str) -> Result<Self, NormalizeError> {
        serde_json::from_str(s).map_err(|e| match e.classify() {
            Category::Data => shape_error(e),
            Category::Io | Category::Syntax | Category::Eof => NormalizeError::Json(e),
        })
    }
}

fn shape_error(e: serde_json::Error) -> NormalizeError {
    NormalizeError::Structure(e.to_string())
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawClue {
    pub label: Option<String>,
    pub direction: Option<String>,
    pub text: Option<Vec<RawClueText>>,
    pub cells: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawClueText {
    pub plain: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCell {
    pub answer: Option<String>,
    pub clues: Option<Vec<i64>>,
    // `label` and `type` are sent too but have no place in a normalized cell.
}

/// Decode one list entry, reporting type mismatches against its position.
pub(crate) fn decode_entry<T: DeserializeOwned>(
    kind: EntryKind,
    index: usize,
    entry: &Value,
) -> Result<T, NormalizeError> {
    if !entry.is_object() {
        return Err(NormalizeError::malformed(
            kind,
            index,
            format!("expected an object, got {}", json_type_name(entry)),
        ));
    }
    T::deserialize(entry).map_err(|e| NormalizeError::malformed(kind, index, e.to_string()))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
