//! `stockcast-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** types (no I/O, no framework concerns):
//! the three dataset record shapes and the customer key used to join them.

pub mod key;
pub mod record;

pub use key::CustomerKey;
pub use record::{InventoryRecord, ProbabilityRecord, RecommendationRecord};
