//! HTTP application wiring (Axum router).
//!
//! Structure:
//! - `routes/`: HTTP routes + handlers (one file per view)
//! - `dto.rs`: request query DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};

use stockcast_datasets::DatasetStore;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
///
/// The store is the only shared state, and it is immutable: each handler
/// re-reads the dataset files on every request.
pub fn build_app(store: DatasetStore) -> Router {
    routes::router().layer(Extension(Arc::new(store)))
}
