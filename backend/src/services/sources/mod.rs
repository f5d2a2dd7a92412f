//! # Source endpoints
//!
//! - `get`: `/source/{id}` and `/source_kind/{id}`.
//! - `list`: `/sources` (optionally filtered by kind, author and language) and
//!   `/source_contexts/{source_id}`.

mod get;
mod list;

use actix_web::web::{self, get};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/source/{source_id}", get().to(get::source))
        .route("/source_kind/{kind_id}", get().to(get::source_kind))
        .route("/sources", get().to(list::sources))
        .route("/source_contexts/{source_id}", get().to(list::source_contexts));
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    use crate::services::configure_routes;
    use crate::services::test_support::corpus;

    fn ids(items: &[Value]) -> Vec<i64> {
        items.iter().filter_map(|item| item["id"].as_i64()).collect()
    }

    #[actix_web::test]
    async fn fetches_source_and_kind() {
        let corpus = corpus();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(corpus.config.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/source/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["title"], "Der Zauberberg");
        assert_eq!(body["author"], "Thomas Mann");
        assert_eq!(body["removed_lemmata_num"], 3);

        let req = test::TestRequest::get().uri("/api/source_kind/2").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "id": 2, "kind": "film" }));

        let req = test::TestRequest::get().uri("/api/source/42").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, Value::Null);
    }

    #[actix_web::test]
    async fn filters_sources() {
        let corpus = corpus();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(corpus.config.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/sources?page=1").to_request();
        let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ids(&body), vec![1, 2, 3]);

        let req = test::TestRequest::get()
            .uri("/api/sources?source_kind_id=2&page=1&page_size=10")
            .to_request();
        let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ids(&body), vec![3]);

        let req = test::TestRequest::get()
            .uri("/api/sources?author=Thomas%20Mann&lang=de&page=2&page_size=1")
            .to_request();
        let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ids(&body), vec![2]);
    }

    #[actix_web::test]
    async fn lists_contexts_of_a_source() {
        let corpus = corpus();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(corpus.config.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/source_contexts/3?page=1&page_size=100")
            .to_request();
        let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ids(&body), vec![4, 5]);
    }
}
