use axum::{Router, routing::get};

pub mod customers;
pub mod inventory;
pub mod overview;
pub mod system;

/// Router for all dashboard endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(overview::overview))
        .route("/customers/lookup", get(customers::lookup))
        .route("/inventory", get(inventory::listing))
        .route("/health", get(system::health))
}
