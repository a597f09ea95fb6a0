use std::collections::HashSet;

use serde::Serialize;

use stockcast_core::{CustomerKey, InventoryRecord, ProbabilityRecord};

/// Threshold above which a forecast counts a customer as a likely buyer.
/// Strict: exactly 0.5 is excluded.
const LIKELY_BUYER_THRESHOLD: f64 = 0.5;

/// Projection of an inventory row for the top-demand list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandEntry {
    pub item_name: String,
    #[serde(rename = "14_day_demand")]
    pub demand_14_day: f64,
}

/// Count of distinct customer ids in the forecast, not the row count.
pub fn total_customers(probabilities: &[ProbabilityRecord]) -> usize {
    probabilities
        .iter()
        .map(|r| &r.customer_id)
        .collect::<HashSet<&CustomerKey>>()
        .len()
}

/// Customers forecast to order with probability strictly above 0.5.
pub fn likely_buyers(probabilities: &[ProbabilityRecord]) -> usize {
    probabilities
        .iter()
        .filter(|r| r.order_probability > LIKELY_BUYER_THRESHOLD)
        .count()
}

/// Items whose restock plan recommends ordering a strictly positive amount.
pub fn critical_stock_items(inventory: &[InventoryRecord]) -> usize {
    inventory.iter().filter(|r| r.recommended_order > 0.0).count()
}

/// The `n` highest-demand items, descending. Ties keep input order.
pub fn top_demand_items(inventory: &[InventoryRecord], n: usize) -> Vec<DemandEntry> {
    let mut entries: Vec<DemandEntry> = inventory
        .iter()
        .map(|r| DemandEntry {
            item_name: r.item_name.clone(),
            demand_14_day: r.demand_14_day,
        })
        .collect();
    // Stable sort so equal demands stay in file order.
    entries.sort_by(|a, b| {
        b.demand_14_day
            .partial_cmp(&a.demand_14_day)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    entries.truncate(n);
    entries
}
