//! Experiment Catalog - immutable, ordered collection of experiment records

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, warn};

use super::Experiment;
use crate::Result;

/// Ordered, immutable collection of experiments.
///
/// ## Design
///
/// Records keep their source order (the order filters and stable sorts
/// preserve). Lookups by identifier are a linear scan: collections are
/// small, hand-curated showcase lists.
///
/// Deserializing a catalog is as lenient as [`ExperimentCatalog::from_json`]:
/// a bad record is dropped, never the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<Value>")]
pub struct ExperimentCatalog {
    experiments: Vec<Experiment>,
}

impl ExperimentCatalog {
    /// Create a catalog from already-validated records.
    #[must_use]
    pub fn new(experiments: Vec<Experiment>) -> Self {
        Self { experiments }
    }

    /// Load a catalog from a JSON array of wire records.
    ///
    /// Loading is lenient and per record: a record without a resolvable
    /// identifier, or with an unknown end-state result, is skipped with a
    /// warning. Malformed optional fields (dates, votes, ...) fall back to
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error only if the input is not a JSON array.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use experiment_showcase::experiment::ExperimentCatalog;
    ///
    /// let catalog = ExperimentCatalog::from_json(
    ///     r#"[{"id": "a"}, {"name": "no id"}, {"experiment_id": "b", "startDate": "TBD"}]"#,
    /// )?;
    /// assert_eq!(catalog.len(), 2);
    /// # Ok::<(), experiment_showcase::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<Value> = serde_json::from_str(json)?;
        Ok(Self::from(records))
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// All records, in source order.
    #[must_use]
    pub fn experiments(&self) -> &[Experiment] {
        &self.experiments
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    /// Whether the catalog has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }

    /// Iterate over records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Experiment> {
        self.experiments.iter()
    }

    /// Get an experiment by identifier.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&Experiment> {
        self.experiments
            .iter()
            .find(|record| record.identifier() == identifier)
    }

    /// Distinct business units, sorted. Records without one are ignored.
    #[must_use]
    pub fn business_units(&self) -> Vec<String> {
        business_units(&self.experiments)
    }
}

impl From<Vec<Value>> for ExperimentCatalog {
    fn from(records: Vec<Value>) -> Self {
        let total = records.len();

        let experiments: Vec<Experiment> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(index, %err, "skipping experiment record");
                    None
                }
            })
            .collect();

        debug!(loaded = experiments.len(), total, "loaded experiment catalog");
        Self { experiments }
    }
}

impl Serialize for ExperimentCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.experiments.serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a ExperimentCatalog {
    type Item = &'a Experiment;
    type IntoIter = std::slice::Iter<'a, Experiment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Experiment> for ExperimentCatalog {
    fn from_iter<I: IntoIterator<Item = Experiment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Distinct, non-empty business units across `experiments`, sorted.
#[must_use]
pub fn business_units(experiments: &[Experiment]) -> Vec<String> {
    experiments
        .iter()
        .map(Experiment::business_unit)
        .filter(|unit| !unit.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_default() {
        let catalog = ExperimentCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.business_units().is_empty());
    }

    #[test]
    fn test_from_json_skips_records_without_identifier() {
        let catalog =
            ExperimentCatalog::from_json(r#"[{"id": "a"}, {"id": ""}, {"experiment_id": "b"}]"#)
                .unwrap();
        let ids: Vec<&str> = catalog.iter().map(Experiment::identifier).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_from_json_defaults_negative_votes() {
        let catalog = ExperimentCatalog::from_json(r#"[{"id": "a", "votes": -1}]"#).unwrap();
        assert_eq!(catalog.get("a").map(Experiment::votes), Some(0));
    }

    #[test]
    fn test_unknown_result_skips_only_that_record() {
        let catalog = ExperimentCatalog::from_json(
            r#"[
                {"id": "a", "experiment_end_state": {"result": "pending"}},
                {"id": "b", "experiment_end_state": {"result": "win"}}
            ]"#,
        )
        .unwrap();
        let ids: Vec<&str> = catalog.iter().map(Experiment::identifier).collect();
        assert_eq!(ids, ["b"]);
    }

    #[test]
    fn test_non_array_is_an_error() {
        assert!(ExperimentCatalog::from_json(r#"{"id": "a"}"#).is_err());
        assert!(ExperimentCatalog::from_json("[1, 2]").unwrap().is_empty());
    }

    #[test]
    fn test_deserialize_matches_from_json() {
        let json = r#"[{"id": "a"}, {"name": "no id"}, {"id": "b", "votes": "many"}]"#;
        let via_serde: ExperimentCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(via_serde, ExperimentCatalog::from_json(json).unwrap());
        assert_eq!(via_serde.len(), 2);
    }

    #[test]
    fn test_serializes_as_array() {
        let catalog = ExperimentCatalog::from_json(r#"[{"id": "a"}]"#).unwrap();
        let value = serde_json::to_value(&catalog).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["id"], "a");
    }

    #[test]
    fn test_get_by_identifier() {
        let catalog = ExperimentCatalog::from_json(r#"[{"id": "a"}, {"id": "b"}]"#).unwrap();
        assert!(catalog.get("b").is_some());
        assert!(catalog.get("c").is_none());
    }

    #[test]
    fn test_business_units_sorted_and_distinct() {
        let catalog = ExperimentCatalog::from_json(
            r#"[
                {"id": "a", "metadata": {"business_unit": "Partners"}},
                {"id": "b", "metadata": {"business_unit": "CMO"}},
                {"id": "c", "metadata": {"business_unit": "Partners"}},
                {"id": "d"}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.business_units(), ["CMO", "Partners"]);
    }
}
