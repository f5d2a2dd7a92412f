//! # Context endpoints
//!
//! `/context/{id}` and the unfiltered `/contexts` listing.

use actix_web::web::{self, get};
use actix_web::HttpResponse;
use serde_json::Value;

use crate::config::ServerConfig;
use crate::db;
use crate::services::{bad_request, entity_response, list_response, run_query, PageQuery};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/context/{context_id}", get().to(context))
        .route("/contexts", get().to(contexts));
}

/// `GET /api/context/{context_id}`.
async fn context(config: web::Data<ServerConfig>, context_id: web::Path<i64>) -> HttpResponse {
    let context_id = context_id.into_inner();
    let result = run_query(&config, move |conn| db::get_context(conn, context_id)).await;
    entity_response("context", result, Value::Null)
}

/// `GET /api/contexts?page=..&page_size=..`
async fn contexts(config: web::Data<ServerConfig>, query: web::Query<PageQuery>) -> HttpResponse {
    let page = match query.validate() {
        Ok(page) => page,
        Err(message) => return bad_request(message),
    };
    let result = run_query(&config, move |conn| db::contexts(conn, page)).await;
    list_response("contexts", result)
}
