use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use stockcast_datasets::DatasetStore;
use stockcast_reports::{critical_stock_items, likely_buyers, top_demand_items, total_customers};

use crate::app::errors;

/// How many high-demand items the overview shows.
const TOP_ITEMS: usize = 5;

/// Overview dashboard: the KPI block plus the top-demand list.
pub async fn overview(
    Extension(store): Extension<Arc<DatasetStore>>,
) -> axum::response::Response {
    let data = match store.load() {
        Ok(d) => d,
        Err(e) => return errors::dataset_unavailable(e),
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "total_customers": total_customers(&data.probabilities),
            "likely_buyers": likely_buyers(&data.probabilities),
            "critical_stock_items": critical_stock_items(&data.inventory),
            "top_items": top_demand_items(&data.inventory, TOP_ITEMS),
        })),
    )
        .into_response()
}
