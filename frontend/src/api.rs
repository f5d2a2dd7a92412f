//! HTTP access to the corpus API.
//!
//! Entities fetched by id never change while the reader is open, so their
//! payloads are kept in a per-thread cache and fetched at most once per URL.
//! Listing pages are not cached: each page slot fetches its page exactly once.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;

use futures_util::future::{FutureExt, LocalBoxFuture, Shared};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;

use common::model::decode_entity;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server answered {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Entity request shared by every view asking for the same URL.
pub type SharedResponse = Shared<LocalBoxFuture<'static, Result<Value, FetchError>>>;

/// Entity requests keyed by URL, whether still in flight or resolved.
#[derive(Default)]
pub struct ResponseCache {
    entries: HashMap<String, SharedResponse>,
}

impl ResponseCache {
    /// The request for `url`. `fetch` is only called when no request for
    /// `url` has been started yet; later callers wait on the same one.
    pub fn get_or_start<F, Fut>(&mut self, url: &str, fetch: F) -> SharedResponse
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, FetchError>> + 'static,
    {
        self.entries
            .entry(url.to_string())
            .or_insert_with(|| fetch().boxed_local().shared())
            .clone()
    }

    /// Drops `request` for `url` so the next view fetches again. A newer
    /// request under the same URL is kept.
    pub fn forget(&mut self, url: &str, request: &SharedResponse) {
        if self
            .entries
            .get(url)
            .is_some_and(|cached| Shared::ptr_eq(cached, request))
        {
            self.entries.remove(url);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

thread_local! {
    static ENTITY_CACHE: RefCell<ResponseCache> = RefCell::new(ResponseCache::default());
}

async fn get_json(url: &str) -> Result<Value, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetches one entity by URL. `Ok(None)` means the API does not know the id.
///
/// Concurrent calls for the same URL share one request. Failed requests are
/// not kept.
pub async fn fetch_entity<T: DeserializeOwned>(url: &str) -> Result<Option<T>, FetchError> {
    let request = ENTITY_CACHE.with(|cache| {
        cache.borrow_mut().get_or_start(url, || {
            let url = url.to_string();
            async move { get_json(&url).await }
        })
    });

    let value = match request.clone().await {
        Ok(value) => value,
        Err(error) => {
            ENTITY_CACHE.with(|cache| cache.borrow_mut().forget(url, &request));
            return Err(error);
        }
    };

    decode_entity(value).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetches one page of a listing.
pub async fn fetch_page<T: DeserializeOwned>(url: &str) -> Result<Vec<T>, FetchError> {
    let value = get_json(url).await?;
    serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn concurrent_requests_for_one_url_fetch_once() {
        let mut cache = ResponseCache::default();
        let fetches = Rc::new(Cell::new(0));
        let start = |fetches: Rc<Cell<u32>>, id: i64| {
            move || {
                fetches.set(fetches.get() + 1);
                async move { Ok::<_, FetchError>(json!({ "id": id })) }
            }
        };

        let first = cache.get_or_start("/api/source_kind/1", start(fetches.clone(), 1));
        let second = cache.get_or_start("/api/source_kind/1", start(fetches.clone(), 2));
        assert_eq!(fetches.get(), 1);
        assert!(Shared::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        assert_eq!(second.now_or_never(), Some(Ok(json!({ "id": 1 }))));
        assert_eq!(first.now_or_never(), Some(Ok(json!({ "id": 1 }))));

        let later = cache.get_or_start("/api/source_kind/1", start(fetches.clone(), 3));
        assert_eq!(later.now_or_never(), Some(Ok(json!({ "id": 1 }))));
        assert_eq!(fetches.get(), 1);
    }

    #[test]
    fn pending_request_is_shared_until_it_resolves() {
        let mut cache = ResponseCache::default();
        let gate = Rc::new(Cell::new(false));
        let waiting = gate.clone();
        let pending = cache.get_or_start("/api/lemma/1", move || {
            futures_util::future::poll_fn(move |_| {
                if waiting.get() {
                    std::task::Poll::Ready(Ok::<_, FetchError>(json!({ "id": 1 })))
                } else {
                    std::task::Poll::Pending
                }
            })
        });
        let second_fetch = Rc::new(Cell::new(false));
        let flag = second_fetch.clone();
        let waiter = cache.get_or_start("/api/lemma/1", move || {
            flag.set(true);
            async { Ok::<_, FetchError>(Value::Null) }
        });
        assert!(!second_fetch.get());

        assert_eq!(pending.clone().now_or_never(), None);
        assert_eq!(waiter.clone().now_or_never(), None);

        gate.set(true);
        assert_eq!(waiter.now_or_never(), Some(Ok(json!({ "id": 1 }))));
        assert_eq!(pending.now_or_never(), Some(Ok(json!({ "id": 1 }))));
    }

    #[test]
    fn failed_request_is_forgotten() {
        let mut cache = ResponseCache::default();
        let failed = cache.get_or_start("/api/lemma/2", || async {
            Err::<Value, _>(FetchError::Network("offline".to_string()))
        });
        assert!(matches!(failed.clone().now_or_never(), Some(Err(FetchError::Network(_)))));

        let retry = cache.get_or_start("/api/lemma/3", || async { Ok::<_, FetchError>(Value::Null) });
        cache.forget("/api/lemma/3", &failed);
        assert_eq!(cache.len(), 2);
        assert!(retry.now_or_never().is_some());

        cache.forget("/api/lemma/2", &failed);
        assert_eq!(cache.len(), 1);
        assert!(cache.get_or_start("/api/lemma/2", || async { Ok::<_, FetchError>(Value::Null) })
            .now_or_never()
            .is_some_and(|result| result.is_ok()));
    }

    #[test]
    fn errors_describe_the_failure() {
        let error = FetchError::Status {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        };
        assert_eq!(error.to_string(), "server answered 503 Service Unavailable");
    }
}
