//! Client-side routes of the reader.
//!
//! Routes are resolved from `location.pathname` and `location.search`. A route
//! whose parameter is invalid resolves to an error so the page can say so
//! without fetching anything.

use std::fmt;

use crate::endpoints::SourceFilter;
use crate::model::StatusVal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Contexts,
    Context(i64),
    Lemma(i64),
    Source(i64),
    Sources(SourceFilter),
    Status(StatusVal),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("Invalid status value")]
    InvalidStatus(String),
    #[error("Invalid value for {param}: {value:?}")]
    InvalidValue { param: &'static str, value: String },
    #[error("Page {0} not found")]
    NotFound(String),
}

impl Route {
    /// Resolves a path and an optional query string (with or without `?`).
    pub fn parse(path: &str, query: &str) -> Result<Route, RouteError> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Ok(Route::Home),
            ["contexts"] => Ok(Route::Contexts),
            ["context", id] => parse_id("context id", id).map(Route::Context),
            ["lemma", id] => parse_id("lemma id", id).map(Route::Lemma),
            ["source", id] => parse_id("source id", id).map(Route::Source),
            ["sources"] => parse_source_filter(query).map(Route::Sources),
            ["status", value] => value
                .parse::<StatusVal>()
                .map(Route::Status)
                .map_err(|_| RouteError::InvalidStatus(value.to_string())),
            _ => Err(RouteError::NotFound(path.to_string())),
        }
    }

    /// Path (and query) that navigates to this route.
    pub fn href(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Contexts => f.write_str("/contexts"),
            Route::Context(id) => write!(f, "/context/{id}"),
            Route::Lemma(id) => write!(f, "/lemma/{id}"),
            Route::Source(id) => write!(f, "/source/{id}"),
            Route::Sources(filter) if filter.is_empty() => f.write_str("/sources"),
            Route::Sources(filter) => write!(f, "/sources?{}", filter.to_query()),
            Route::Status(status) => write!(f, "/status/{status}"),
        }
    }
}

fn parse_id(param: &'static str, value: &str) -> Result<i64, RouteError> {
    value.parse().map_err(|_| RouteError::InvalidValue {
        param,
        value: value.to_string(),
    })
}

/// Reads the `/sources` filters. Blank values count as absent and unknown
/// keys are ignored.
fn parse_source_filter(query: &str) -> Result<SourceFilter, RouteError> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(query).map_err(|_| RouteError::InvalidValue {
            param: "query",
            value: query.to_string(),
        })?;

    let mut filter = SourceFilter::default();
    for (key, value) in pairs {
        if value.trim().is_empty() {
            continue;
        }
        match key.as_str() {
            "source_kind_id" => filter.source_kind_id = Some(parse_id("source_kind_id", &value)?),
            "author" => filter.author = Some(value),
            "lang" => filter.lang = Some(value),
            _ => {}
        }
    }
    Ok(filter)
}
