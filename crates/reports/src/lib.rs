//! `stockcast-reports` — pure aggregation over loaded dataset tables.
//!
//! Everything here is stateless: functions take table slices and return
//! owned summaries, so the same inputs always give the same outputs.

pub mod kpi;
pub mod lookup;

pub use kpi::{DemandEntry, critical_stock_items, likely_buyers, top_demand_items, total_customers};
pub use lookup::{CustomerInsight, RecommendationEntry, customer_lookup, display_probability};
