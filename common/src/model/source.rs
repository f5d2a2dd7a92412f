use serde::{Deserialize, Serialize};

/// A document that contexts were excerpted from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: i64,
    pub title: String,
    pub source_kind_id: i64,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub removed_lemmata_num: Option<i64>,
}

/// Category of a source (book, article, film...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceKind {
    pub id: i64,
    pub kind: String,
}
