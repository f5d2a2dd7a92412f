//! URL builders for the corpus REST API.
//!
//! Listing URLs are returned without `page`/`page_size`; the pager appends
//! those (see [`crate::pagination::page_url`]).

use serde::{Deserialize, Serialize};

use crate::model::StatusVal;

/// Optional filters of the `/sources` listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_kind_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl SourceFilter {
    pub fn by_kind(source_kind_id: i64) -> Self {
        Self {
            source_kind_id: Some(source_kind_id),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.source_kind_id.is_none() && self.author.is_none() && self.lang.is_none()
    }

    /// Url-encoded query string without the leading `?`; empty when no
    /// filter is set.
    pub fn to_query(&self) -> String {
        // A flat struct of scalars has no serialization failure mode.
        serde_urlencoded::to_string(self).unwrap_or_default()
    }
}

/// Absolute URLs of every endpoint the reader consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrls {
    base: String,
}

impl ApiUrls {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn lemma(&self, lemma_id: i64) -> String {
        format!("{}/lemma/{}", self.base, lemma_id)
    }

    pub fn status(&self, status_id: i64) -> String {
        format!("{}/lemma_status_by_id/{}", self.base, status_id)
    }

    pub fn source(&self, source_id: i64) -> String {
        format!("{}/source/{}", self.base, source_id)
    }

    pub fn source_kind(&self, source_kind_id: i64) -> String {
        format!("{}/source_kind/{}", self.base, source_kind_id)
    }

    pub fn context(&self, context_id: i64) -> String {
        format!("{}/context/{}", self.base, context_id)
    }

    pub fn contexts(&self) -> String {
        format!("{}/contexts", self.base)
    }

    pub fn lemma_contexts(&self, lemma_id: i64) -> String {
        format!("{}/lemma_contexts/{}", self.base, lemma_id)
    }

    pub fn source_contexts(&self, source_id: i64) -> String {
        format!("{}/source_contexts/{}", self.base, source_id)
    }

    pub fn sources(&self, filter: &SourceFilter) -> String {
        if filter.is_empty() {
            format!("{}/sources", self.base)
        } else {
            format!("{}/sources?{}", self.base, filter.to_query())
        }
    }

    pub fn status_lemmata(&self, status: StatusVal) -> String {
        format!("{}/status_lemmata?status_val={}", self.base, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::page_url;

    #[test]
    fn builds_entity_urls() {
        let api = ApiUrls::new("http://127.0.0.1:8000/");
        assert_eq!(api.lemma(5), "http://127.0.0.1:8000/lemma/5");
        assert_eq!(api.status(1), "http://127.0.0.1:8000/lemma_status_by_id/1");
        assert_eq!(api.source_kind(2), "http://127.0.0.1:8000/source_kind/2");
        assert_eq!(api.lemma_contexts(9), "http://127.0.0.1:8000/lemma_contexts/9");
    }

    #[test]
    fn filters_survive_pagination() {
        let api = ApiUrls::new("/api");
        let filter = SourceFilter {
            source_kind_id: Some(3),
            author: Some("Thomas Mann".to_string()),
            lang: None,
        };
        let query = api.sources(&filter);
        assert_eq!(query, "/api/sources?source_kind_id=3&author=Thomas+Mann");
        assert_eq!(
            page_url(&query, 2, 100),
            "/api/sources?source_kind_id=3&author=Thomas+Mann&page=2&page_size=100"
        );
        assert_eq!(api.sources(&SourceFilter::default()), "/api/sources");
    }

    #[test]
    fn status_listing_carries_the_status() {
        let api = ApiUrls::new("/api");
        assert_eq!(
            page_url(&api.status_lemmata(StatusVal::Pushed), 1, 100),
            "/api/status_lemmata?status_val=pushed&page=1&page_size=100"
        );
    }
}
