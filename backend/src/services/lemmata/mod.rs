//! # Lemma endpoints
//!
//! - `get`: `/lemma/{lemma_id}` and `/lemma_status_by_id/{status_id}`.
//! - `list`: `/status_lemmata` and `/lemma_contexts/{lemma_id}`.

mod get;
mod list;

use actix_web::web::{self, get};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/lemma/{lemma_id}", get().to(get::lemma))
        .route("/lemma_status_by_id/{status_id}", get().to(get::status))
        .route("/status_lemmata", get().to(list::status_lemmata))
        .route("/lemma_contexts/{lemma_id}", get().to(list::lemma_contexts));
}
