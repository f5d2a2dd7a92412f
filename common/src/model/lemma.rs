use serde::{Deserialize, Serialize};

/// A canonical dictionary headword tracked by the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lemma {
    pub id: i64,
    pub lemma: String,
    /// ISO-8601 timestamp of the first time the lemma was encountered.
    pub created: String,
    pub status_id: i64,
    /// Source the lemma was first extracted from, when the API reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_in_source: Option<i64>,
}
