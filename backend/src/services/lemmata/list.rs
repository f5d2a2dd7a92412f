use actix_web::{web, HttpResponse};
use common::model::StatusVal;
use serde::Deserialize;

use crate::config::ServerConfig;
use crate::db;
use crate::services::{bad_request, list_response, run_query, validate_page, PageQuery};

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status_val: String,
    pub page: u32,
    pub page_size: Option<u32>,
}

/// `GET /api/status_lemmata?status_val=..&page=..&page_size=..`
pub async fn status_lemmata(
    config: web::Data<ServerConfig>,
    query: web::Query<StatusQuery>,
) -> HttpResponse {
    let status: StatusVal = match query.status_val.parse() {
        Ok(status) => status,
        Err(e) => return bad_request(e.to_string()),
    };
    let page = match validate_page(query.page, query.page_size) {
        Ok(page) => page,
        Err(message) => return bad_request(message),
    };
    let result = run_query(&config, move |conn| db::status_lemmata(conn, status, page)).await;
    list_response("lemmata", result)
}

/// `GET /api/lemma_contexts/{lemma_id}?page=..&page_size=..`
pub async fn lemma_contexts(
    config: web::Data<ServerConfig>,
    lemma_id: web::Path<i64>,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    let page = match query.validate() {
        Ok(page) => page,
        Err(message) => return bad_request(message),
    };
    let lemma_id = lemma_id.into_inner();
    let result = run_query(&config, move |conn| db::lemma_contexts(conn, lemma_id, page)).await;
    list_response("contexts", result)
}
