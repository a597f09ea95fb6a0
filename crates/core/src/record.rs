use serde::{Deserialize, Serialize};

use crate::key::CustomerKey;

/// One row of the 14-day order-probability forecast.
///
/// One record per customer is assumed by the exporter; duplicates are not
/// rejected here and collapse at aggregation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityRecord {
    pub customer_id: CustomerKey,
    /// Forecast probability in `[0, 1]`.
    pub order_probability: f64,
}

/// One recommended product for one customer. Zero or more rows per customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub customer_id: CustomerKey,
    pub item_name: String,
    pub predicted_quantity: f64,
    pub selection_probability: f64,
}

/// One row of the inventory restock plan. One record per item is assumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub item_name: String,
    /// Forecast demand over the next 14 days. The exported column is named
    /// `14_day_demand`; Rust field names cannot start with a digit.
    #[serde(rename = "14_day_demand")]
    pub demand_14_day: f64,
    pub recommended_order: f64,
}
