//! Corpus entities as served by the REST API.
//!
//! All records are read-only from the reader's point of view and reference
//! each other by integer id only.

pub mod context;
pub mod lemma;
pub mod source;
pub mod status;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use context::Context;
pub use lemma::Lemma;
pub use source::{Source, SourceKind};
pub use status::{InvalidStatus, Status, StatusVal};

/// Decodes a fetch-by-id payload.
///
/// The API answers an unknown id with an empty object (`{}`) or `null`;
/// both map to `Ok(None)` so views can tell "not found" apart from a
/// malformed record.
pub fn decode_entity<T: DeserializeOwned>(value: Value) -> Result<Option<T>, serde_json::Error> {
    match value {
        Value::Null => Ok(None),
        Value::Object(ref map) if map.is_empty() => Ok(None),
        other => serde_json::from_value(other).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_is_not_found() {
        let lemma: Option<Lemma> = decode_entity(json!({})).unwrap();
        assert!(lemma.is_none());
        let source: Option<Source> = decode_entity(Value::Null).unwrap();
        assert!(source.is_none());
    }

    #[test]
    fn decodes_full_record() {
        let lemma: Option<Lemma> = decode_entity(json!({
            "id": 7,
            "lemma": "Haus",
            "created": "2024-03-01T10:22:00",
            "status_id": 1
        }))
        .unwrap();
        let lemma = lemma.unwrap();
        assert_eq!(lemma.lemma, "Haus");
        assert_eq!(lemma.found_in_source, None);
    }

    #[test]
    fn source_optional_fields_default_to_none() {
        let source: Source =
            serde_json::from_value(json!({"id": 3, "title": "Faust", "source_kind_id": 1}))
                .unwrap();
        assert_eq!(source.author, None);
        assert_eq!(source.removed_lemmata_num, None);
    }

    #[test]
    fn partial_record_is_an_error() {
        let result: Result<Option<Lemma>, _> = decode_entity(json!({"id": 7}));
        assert!(result.is_err());
    }
}
