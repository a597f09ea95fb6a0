use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use stockcast_core::CustomerKey;
use stockcast_datasets::DatasetStore;
use stockcast_reports::customer_lookup;

use crate::app::{dto, errors};

/// Customer lookup view.
///
/// Without a `customer_id` query parameter this is the empty search form.
/// With one, the result is either the matched insight or a not-found
/// payload; both are 200 responses, a miss is not a fault.
pub async fn lookup(
    Extension(store): Extension<Arc<DatasetStore>>,
    Query(query): Query<dto::LookupQuery>,
) -> axum::response::Response {
    let Some(raw_id) = query.customer_id else {
        return (StatusCode::OK, Json(serde_json::json!({ "mode": "form" }))).into_response();
    };

    let data = match store.load() {
        Ok(d) => d,
        Err(e) => return errors::dataset_unavailable(e),
    };

    let key = CustomerKey::parse(&raw_id);
    match customer_lookup(&data.probabilities, &data.recommendations, &key) {
        Some(insight) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "found": true,
                "customer_id": insight.customer_id,
                "probability_pct": insight.probability_pct,
                "recommendations": insight.recommendations,
            })),
        )
            .into_response(),
        None => (
            StatusCode::OK,
            Json(serde_json::json!({
                "found": false,
                "message": "Customer ID not found in predictions.",
            })),
        )
            .into_response(),
    }
}
