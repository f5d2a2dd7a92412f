use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::config::ServerConfig;
use crate::db;
use crate::services::{entity_response, run_query};

/// `GET /api/source/{source_id}`.
pub async fn source(config: web::Data<ServerConfig>, source_id: web::Path<i64>) -> HttpResponse {
    let source_id = source_id.into_inner();
    let result = run_query(&config, move |conn| db::get_source(conn, source_id)).await;
    entity_response("source", result, Value::Null)
}

/// `GET /api/source_kind/{kind_id}`.
pub async fn source_kind(config: web::Data<ServerConfig>, kind_id: web::Path<i64>) -> HttpResponse {
    let kind_id = kind_id.into_inner();
    let result = run_query(&config, move |conn| db::get_source_kind(conn, kind_id)).await;
    entity_response("source kind", result, Value::Null)
}
