use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockcast_datasets::DatasetError;

/// Message shown to users whenever the exported files cannot be read.
pub const DATA_UNAVAILABLE_MESSAGE: &str =
    "Forecast data not available. Run the modeling job to regenerate the exports.";

/// Map a loader failure to the user-facing 503 payload. Every view goes
/// through this instead of surfacing a fault.
pub fn dataset_unavailable(err: DatasetError) -> axum::response::Response {
    tracing::warn!(error = %err, "dataset load failed");
    json_error(
        StatusCode::SERVICE_UNAVAILABLE,
        "data_unavailable",
        DATA_UNAVAILABLE_MESSAGE,
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
