//! # Corpus API
//!
//! Read-only JSON endpoints over the corpus database, all mounted under
//! `/api`. Handlers are grouped by the entity they list:
//!
//! - `lemmata`: `/lemma/{id}`, `/lemma_status_by_id/{id}`, `/status_lemmata`,
//!   `/lemma_contexts/{lemma_id}`
//! - `sources`: `/source/{id}`, `/source_kind/{id}`, `/sources`,
//!   `/source_contexts/{source_id}`
//! - `contexts`: `/context/{id}`, `/contexts`
//!
//! Every query runs on a blocking thread with its own read-only connection.
//! Database failures answer `503 Service Unavailable` with a text body; bad
//! query parameters answer `400 Bad Request`.

mod contexts;
mod lemmata;
mod sources;

use actix_web::web::{get, scope};
use actix_web::{HttpResponse, Scope};
use log::error;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::ServerConfig;
use crate::db::{self, DbError, Page};

/// The base path for all corpus endpoints.
const API_PATH: &str = "/api";

const DEFAULT_PAGE_SIZE: u32 = 100;
const MAX_PAGE_SIZE: u32 = 1000;

/// Configures and returns the Actix `Scope` holding every corpus route.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/api_status", get().to(api_status))
        .configure(lemmata::configure)
        .configure(sources::configure)
        .configure(contexts::configure)
}

async fn api_status() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "api_status": "working" }))
}

/// `page` and `page_size` query parameters.
#[derive(Debug, Deserialize)]
pub(crate) struct PageQuery {
    pub page: u32,
    pub page_size: Option<u32>,
}

impl PageQuery {
    pub fn validate(&self) -> Result<Page, String> {
        validate_page(self.page, self.page_size)
    }
}

pub(crate) fn validate_page(page: u32, page_size: Option<u32>) -> Result<Page, String> {
    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    if page < 1 {
        return Err(format!("page must be at least 1, got {}", page));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(format!(
            "page_size must be between 1 and {}, got {}",
            MAX_PAGE_SIZE, page_size
        ));
    }
    Ok(Page { page, page_size })
}

/// Runs `query` against a fresh read-only connection on a blocking thread.
pub(crate) async fn run_query<T, F>(config: &ServerConfig, query: F) -> Result<T, DbError>
where
    F: FnOnce(&Connection) -> Result<T, DbError> + Send + 'static,
    T: Send + 'static,
{
    let path = config.database.clone();
    tokio::task::spawn_blocking(move || {
        let conn = db::open(&path)?;
        query(&conn)
    })
    .await
    .map_err(|e| DbError::Task(e.to_string()))?
}

/// Answers a fetch-by-id. Unknown ids answer `missing` with `200 OK`.
pub(crate) fn entity_response<T: Serialize>(
    label: &str,
    result: Result<Option<T>, DbError>,
    missing: Value,
) -> HttpResponse {
    match result {
        Ok(Some(entity)) => HttpResponse::Ok().json(entity),
        Ok(None) => HttpResponse::Ok().json(missing),
        Err(e) => unavailable(label, e),
    }
}

pub(crate) fn list_response<T: Serialize>(label: &str, result: Result<Vec<T>, DbError>) -> HttpResponse {
    match result {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => unavailable(label, e),
    }
}

pub(crate) fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().body(message)
}

fn unavailable(label: &str, e: DbError) -> HttpResponse {
    error!("Error retrieving {}: {}", label, e);
    HttpResponse::ServiceUnavailable().body(format!("Error retrieving {}: {}", label, e))
}

#[cfg(test)]
pub(crate) mod test_support {
    use rusqlite::Connection;
    use tempfile::TempDir;

    use crate::config::ServerConfig;
    use crate::db::fixtures;

    /// A seeded corpus on disk; dropping it removes the file.
    pub struct Corpus {
        _dir: TempDir,
        pub config: ServerConfig,
    }

    pub fn corpus() -> Corpus {
        let dir = tempfile::tempdir().unwrap();
        let database = dir.path().join("lexicon.sqlite");
        let conn = Connection::open(&database).unwrap();
        fixtures::seed(&conn).unwrap();
        drop(conn);

        Corpus {
            config: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                database,
                open_browser: false,
            },
            _dir: dir,
        }
    }
}


#[cfg(test)]
mod api_tests {
    use super::test_support::corpus;
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn reports_status() {
        let corpus = corpus();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(corpus.config.clone()))
                .service(configure_routes()),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/api_status").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "api_status": "working" }));
    }

    #[actix_web::test]
    async fn missing_database_is_unavailable() {
        let mut corpus = corpus();
        corpus.config.database = corpus.config.database.with_file_name("missing.sqlite");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(corpus.config.clone()))
                .service(configure_routes()),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/lemma/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
