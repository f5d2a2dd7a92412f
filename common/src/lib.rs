//! Shared core of the lexicon reader.
//!
//! Everything here is target independent so it can be used by the Yew
//! frontend (wasm) and the API server, and tested natively.

pub mod annotation;
pub mod endpoints;
pub mod format;
pub mod model;
pub mod pagination;
pub mod routes;
