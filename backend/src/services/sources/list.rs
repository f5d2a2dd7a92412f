use actix_web::{web, HttpResponse};
use common::endpoints::SourceFilter;
use serde::Deserialize;

use crate::config::ServerConfig;
use crate::db;
use crate::services::{bad_request, list_response, run_query, validate_page, PageQuery};

/// Query of `/sources`: paging plus the optional filters.
#[derive(Debug, Deserialize)]
pub struct SourcesQuery {
    pub page: u32,
    pub page_size: Option<u32>,
    pub source_kind_id: Option<i64>,
    pub author: Option<String>,
    pub lang: Option<String>,
}

impl SourcesQuery {
    /// Blank text filters are treated as absent.
    fn filter(&self) -> SourceFilter {
        let non_blank = |value: &Option<String>| value.clone().filter(|v| !v.trim().is_empty());
        SourceFilter {
            source_kind_id: self.source_kind_id,
            author: non_blank(&self.author),
            lang: non_blank(&self.lang),
        }
    }
}

/// `GET /api/sources?page=..[&source_kind_id=..][&author=..][&lang=..]`
pub async fn sources(
    config: web::Data<ServerConfig>,
    query: web::Query<SourcesQuery>,
) -> HttpResponse {
    let page = match validate_page(query.page, query.page_size) {
        Ok(page) => page,
        Err(message) => return bad_request(message),
    };
    let filter = query.filter();
    let result = run_query(&config, move |conn| db::sources(conn, &filter, page)).await;
    list_response("sources", result)
}

/// `GET /api/source_contexts/{source_id}?page=..&page_size=..`
pub async fn source_contexts(
    config: web::Data<ServerConfig>,
    source_id: web::Path<i64>,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    let page = match query.validate() {
        Ok(page) => page,
        Err(message) => return bad_request(message),
    };
    let source_id = source_id.into_inner();
    let result = run_query(&config, move |conn| db::source_contexts(conn, source_id, page)).await;
    list_response("contexts", result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_are_dropped() {
        let query = web::Query::<SourcesQuery>::from_query("page=1&author=%20&lang=de").unwrap();
        assert_eq!(
            query.filter(),
            SourceFilter {
                source_kind_id: None,
                author: None,
                lang: Some("de".to_string()),
            }
        );
    }
}
