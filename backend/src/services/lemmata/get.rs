use actix_web::{web, HttpResponse};
use serde_json::{json, Value};

use crate::config::ServerConfig;
use crate::db;
use crate::services::{entity_response, run_query};

/// `GET /api/lemma/{lemma_id}`. An unknown lemma answers `{}`.
pub async fn lemma(config: web::Data<ServerConfig>, lemma_id: web::Path<i64>) -> HttpResponse {
    let lemma_id = lemma_id.into_inner();
    let result = run_query(&config, move |conn| db::get_lemma(conn, lemma_id)).await;
    entity_response("lemma", result, json!({}))
}

/// `GET /api/lemma_status_by_id/{status_id}`.
pub async fn status(config: web::Data<ServerConfig>, status_id: web::Path<i64>) -> HttpResponse {
    let status_id = status_id.into_inner();
    let result = run_query(&config, move |conn| db::get_status(conn, status_id)).await;
    entity_response("lemma status", result, Value::Null)
}
