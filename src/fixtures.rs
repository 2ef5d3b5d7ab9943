//! Built-in showcase datasets
//!
//! The two experiment collections and the metrics-comparison table are
//! compiled into the binary as JSON and parsed once per process on first
//! access. They are never mutated afterwards.

use std::sync::{Arc, OnceLock};

use serde::de::DeserializeOwned;
use tracing::error;

use crate::comparison::ExperimentMetrics;
use crate::experiment::ExperimentCatalog;

const MY_EXPERIMENTS_JSON: &str = include_str!("../data/my_experiments.json");
const FOS_EXPERIMENTS_JSON: &str = include_str!("../data/fos_experiments.json");
const METRIC_COMPARISONS_JSON: &str = include_str!("../data/metric_comparisons.json");

static MY_EXPERIMENTS: OnceLock<Arc<ExperimentCatalog>> = OnceLock::new();
static FOS_EXPERIMENTS: OnceLock<Arc<ExperimentCatalog>> = OnceLock::new();
static METRIC_COMPARISONS: OnceLock<Vec<ExperimentMetrics>> = OnceLock::new();

/// The "My Experiments" collection (8 records).
#[must_use]
pub fn my_experiments() -> Arc<ExperimentCatalog> {
    Arc::clone(MY_EXPERIMENTS.get_or_init(|| load_catalog("my_experiments", MY_EXPERIMENTS_JSON)))
}

/// The "FOS 2026" front-of-site collection (14 records).
#[must_use]
pub fn fos_experiments() -> Arc<ExperimentCatalog> {
    Arc::clone(
        FOS_EXPERIMENTS.get_or_init(|| load_catalog("fos_experiments", FOS_EXPERIMENTS_JSON)),
    )
}

/// Analysis results shown in the metrics comparison table.
#[must_use]
pub fn metric_comparisons() -> &'static [ExperimentMetrics] {
    METRIC_COMPARISONS.get_or_init(|| load_json("metric_comparisons", METRIC_COMPARISONS_JSON))
}

fn load_catalog(dataset: &str, json: &str) -> Arc<ExperimentCatalog> {
    let catalog = ExperimentCatalog::from_json(json).unwrap_or_else(|err| {
        error!(dataset, %err, "built-in dataset failed to parse");
        ExperimentCatalog::default()
    });
    Arc::new(catalog)
}

fn load_json<T: DeserializeOwned + Default>(dataset: &str, json: &str) -> T {
    serde_json::from_str(json).unwrap_or_else(|err| {
        error!(dataset, %err, "built-in dataset failed to parse");
        T::default()
    })
}
