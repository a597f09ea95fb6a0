use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use stockcast_datasets::DatasetStore;

use crate::app::errors;

/// Inventory view: the full restock plan in file row order.
pub async fn listing(
    Extension(store): Extension<Arc<DatasetStore>>,
) -> axum::response::Response {
    let data = match store.load() {
        Ok(d) => d,
        Err(e) => return errors::dataset_unavailable(e),
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({ "items": data.inventory })),
    )
        .into_response()
}
