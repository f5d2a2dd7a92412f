mod config;
mod db;
mod services;

use crate::config::ServerConfig;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use clap::Parser;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the bundled reader. Unknown paths get `index.html` so client routes
/// such as `/lemma/3` survive a reload.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::parse();
    let url = config.url();

    if !config.database.exists() {
        warn!(
            "Corpus database {} not found; API requests will fail until it exists",
            config.database.display()
        );
    }

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open browser: {}", e);
            }
        });
    }

    info!("Server running at {} (corpus: {})", url, config.database.display());

    let bind = (config.host.clone(), config.port);
    let data = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .service(services::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind(bind)?
    .run()
    .await
}
