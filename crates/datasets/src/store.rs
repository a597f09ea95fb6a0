use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use stockcast_core::{InventoryRecord, ProbabilityRecord, RecommendationRecord};

/// File names written by the modeling job. Relative to the data directory.
pub const PROBABILITY_FILE: &str = "order_probability_next_14_days.csv";
pub const RECOMMENDATION_FILE: &str = "customer_recommendations.csv";
pub const INVENTORY_FILE: &str = "inventory_plan.csv";

/// Loader failure. One variant on purpose: a missing or unreadable file
/// fails the whole load as a unit, and callers render a user-facing
/// message instead of partial data.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset unavailable: {path}")]
    Unavailable { path: PathBuf },
}

/// An immutable snapshot of the three exported tables, in file row order.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub probabilities: Vec<ProbabilityRecord>,
    pub recommendations: Vec<RecommendationRecord>,
    pub inventory: Vec<InventoryRecord>,
}

/// Read-through accessor over the data directory.
///
/// Holds only the directory path; every [`load`](Self::load) call re-reads
/// the files, so a fresh export is picked up on the next request without
/// any invalidation machinery.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    data_dir: PathBuf,
}

impl DatasetStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load all three tables, or fail as a unit.
    pub fn load(&self) -> Result<Datasets, DatasetError> {
        let probabilities = self.read_table(PROBABILITY_FILE)?;
        let recommendations = self.read_table(RECOMMENDATION_FILE)?;
        let inventory = self.read_table(INVENTORY_FILE)?;
        Ok(Datasets {
            probabilities,
            recommendations,
            inventory,
        })
    }

    fn read_table<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>, DatasetError> {
        let path = self.data_dir.join(file_name);
        let mut reader = csv::Reader::from_path(&path).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to open dataset");
            DatasetError::Unavailable { path: path.clone() }
        })?;

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            let row: T = result.map_err(|e| {
                tracing::warn!(path = %path.display(), error = %e, "failed to read dataset row");
                DatasetError::Unavailable { path: path.clone() }
            })?;
            rows.push(row);
        }
        Ok(rows)
    }
}
