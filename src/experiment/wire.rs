//! JSON wire representation of an experiment record.
//!
//! Field names follow the dashboard's legacy data feed. The identifier may
//! arrive under either `id` or `experiment_id`; the first non-empty one wins.

use chrono::NaiveDate;
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::experiment_record::{AnalysisConfig, EndState, Experiment, Hypothesis, Ownership};
use super::{ExperimentKind, ExperimentResult};
use crate::{Error, Result};

#[doc(hidden)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperimentWire {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    experiment_id: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    hypothesis: Option<Hypothesis>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    metadata: Option<Ownership>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    analysis_configuration: Option<AnalysisConfig>,
    #[serde(
        default,
        deserialize_with = "end_state",
        skip_serializing_if = "Option::is_none"
    )]
    experiment_end_state: Option<EndState>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    votes: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(
        rename = "experimentType",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    kind: Option<ExperimentKind>,
    #[serde(
        rename = "startDate",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    start_date: Option<NaiveDate>,
    #[serde(
        rename = "endDate",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    end_date: Option<NaiveDate>,
}

/// Optional field that degrades to `None` when present but malformed
/// (`"startDate": "TBD"`, `"votes": -1`, `"name": 42`, ...).
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// End state block. An absent, null or empty `result` means running; a
/// non-empty result outside the vocabulary is an error.
fn end_state<'de, D>(deserializer: D) -> std::result::Result<Option<EndState>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(block) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    match block.get("result") {
        Some(Value::String(result)) if !result.is_empty() => result
            .parse::<ExperimentResult>()
            .map(|result| Some(EndState::new(result)))
            .map_err(de::Error::custom),
        _ => Ok(Some(EndState::default())),
    }
}

impl ExperimentWire {
    /// Resolve the identifier from the two legacy fields.
    fn resolved_identifier(&mut self) -> Option<String> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());
        non_empty(self.id.take()).or_else(|| non_empty(self.experiment_id.take()))
    }

    pub(super) fn into_experiment(mut self) -> Result<Experiment> {
        let identifier = self
            .resolved_identifier()
            .ok_or(Error::MissingIdentifier)?;

        Ok(Experiment {
            identifier,
            name: self.name,
            hypothesis: self.hypothesis,
            ownership: self.metadata,
            analysis: self.analysis_configuration,
            end_state: self.experiment_end_state,
            votes: self.votes,
            lifecycle_status: self.status,
            kind: self.kind,
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}

impl From<Experiment> for ExperimentWire {
    fn from(record: Experiment) -> Self {
        Self {
            id: Some(record.identifier),
            experiment_id: None,
            name: record.name,
            hypothesis: record.hypothesis,
            metadata: record.ownership,
            analysis_configuration: record.analysis,
            experiment_end_state: record.end_state,
            votes: record.votes,
            status: record.lifecycle_status,
            kind: record.kind,
            start_date: record.start_date,
            end_date: record.end_date,
        }
    }
}
