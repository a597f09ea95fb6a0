//! `stockcast-datasets` — read-through access to the exported forecast files.
//!
//! The offline modeling job drops three CSV files into a data directory;
//! this crate reads them into in-memory tables. There is deliberately no
//! cache and no partial-load path: callers get either all three tables or a
//! single unavailable error.

pub mod store;

pub use store::{
    DatasetError, DatasetStore, Datasets, INVENTORY_FILE, PROBABILITY_FILE, RECOMMENDATION_FILE,
};
