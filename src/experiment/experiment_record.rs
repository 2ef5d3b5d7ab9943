//! Experiment Record - the showcase's sole entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::wire::ExperimentWire;
use super::{ExperimentKind, ExperimentResult, ExperimentStatus};
use crate::{Error, Result};

/// Free-text hypothesis behind an experiment. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hypothesis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    change: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expectation: Option<String>,
}

impl Hypothesis {
    /// Create a hypothesis with all three parts present.
    #[must_use]
    pub fn new(
        reason: impl Into<String>,
        change: impl Into<String>,
        expectation: impl Into<String>,
    ) -> Self {
        Self {
            reason: Some(reason.into()),
            change: Some(change.into()),
            expectation: Some(expectation.into()),
        }
    }

    /// Why the change should work, or `""`.
    #[must_use]
    pub fn reason(&self) -> &str {
        self.reason.as_deref().unwrap_or_default()
    }

    /// What is being changed, or `""`.
    #[must_use]
    pub fn change(&self) -> &str {
        self.change.as_deref().unwrap_or_default()
    }

    /// The expected outcome, or `""`.
    #[must_use]
    pub fn expectation(&self) -> &str {
        self.expectation.as_deref().unwrap_or_default()
    }
}

/// Organizational ownership of an experiment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ownership {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    business_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    owners: Vec<String>,
}

impl Ownership {
    /// Create an ownership block.
    #[must_use]
    pub fn new(business_unit: impl Into<String>, owners: Vec<String>) -> Self {
        Self {
            business_unit: Some(business_unit.into()),
            owners,
        }
    }

    /// Owning business unit, or `""`.
    #[must_use]
    pub fn business_unit(&self) -> &str {
        self.business_unit.as_deref().unwrap_or_default()
    }

    /// Owner handles, in order.
    #[must_use]
    pub fn owners(&self) -> &[String] {
        &self.owners
    }
}

/// Analysis configuration: which metrics decide the call and which scorecard applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    decision_metrics: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    guardrail_metrics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scorecard_template: Option<String>,
}

impl AnalysisConfig {
    /// Create an analysis configuration.
    #[must_use]
    pub fn new(
        decision_metrics: Vec<String>,
        guardrail_metrics: Vec<String>,
        scorecard_template: Option<String>,
    ) -> Self {
        Self {
            decision_metrics,
            guardrail_metrics,
            scorecard_template,
        }
    }

    /// Decision metric names.
    #[must_use]
    pub fn decision_metrics(&self) -> &[String] {
        &self.decision_metrics
    }

    /// Guardrail metric names.
    #[must_use]
    pub fn guardrail_metrics(&self) -> &[String] {
        &self.guardrail_metrics
    }

    /// Scorecard template identifier, if configured.
    #[must_use]
    pub fn scorecard_template(&self) -> Option<&str> {
        self.scorecard_template.as_deref()
    }
}

/// Recorded end state. A missing `result` means the experiment is still running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    result: Option<ExperimentResult>,
}

impl EndState {
    /// End state carrying a result.
    #[must_use]
    pub const fn new(result: ExperimentResult) -> Self {
        Self {
            result: Some(result),
        }
    }

    /// The recorded result, if any.
    #[must_use]
    pub const fn result(&self) -> Option<ExperimentResult> {
        self.result
    }
}

/// Experiment Record describes one showcased experiment.
///
/// Records are immutable once built: the dashboard only derives new views
/// over them. Optional fields are exposed through accessors that resolve to
/// a guaranteed-present default (`""`, `0`, empty slice, `Running`).
///
/// The serialized form uses the dashboard's legacy field names (`id` /
/// `experiment_id`, `metadata`, `analysis_configuration`,
/// `experiment_end_state`, `experimentType`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExperimentWire", into = "ExperimentWire")]
pub struct Experiment {
    pub(super) identifier: String,
    pub(super) name: Option<String>,
    pub(super) hypothesis: Option<Hypothesis>,
    pub(super) ownership: Option<Ownership>,
    pub(super) analysis: Option<AnalysisConfig>,
    pub(super) end_state: Option<EndState>,
    pub(super) votes: Option<u32>,
    pub(super) lifecycle_status: Option<String>,
    pub(super) kind: Option<ExperimentKind>,
    pub(super) start_date: Option<NaiveDate>,
    pub(super) end_date: Option<NaiveDate>,
}

impl Experiment {
    /// Create a builder for an experiment with the given identifier.
    #[must_use]
    pub fn builder(identifier: impl Into<String>) -> ExperimentBuilder {
        ExperimentBuilder::new(identifier)
    }

    /// Resolved, non-empty identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Raw display name, if one was recorded.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Display name, falling back to the identifier.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.identifier,
        }
    }

    /// The hypothesis block, if any.
    #[must_use]
    pub const fn hypothesis(&self) -> Option<&Hypothesis> {
        self.hypothesis.as_ref()
    }

    /// Hypothesis change text, or `""`.
    #[must_use]
    pub fn hypothesis_change(&self) -> &str {
        self.hypothesis.as_ref().map_or("", Hypothesis::change)
    }

    /// Hypothesis expectation text, or `""`.
    #[must_use]
    pub fn hypothesis_expectation(&self) -> &str {
        self.hypothesis.as_ref().map_or("", Hypothesis::expectation)
    }

    /// Hypothesis reason text, or `""`.
    #[must_use]
    pub fn hypothesis_reason(&self) -> &str {
        self.hypothesis.as_ref().map_or("", Hypothesis::reason)
    }

    /// The ownership block, if any.
    #[must_use]
    pub const fn ownership(&self) -> Option<&Ownership> {
        self.ownership.as_ref()
    }

    /// Owning business unit, or `""`.
    #[must_use]
    pub fn business_unit(&self) -> &str {
        self.ownership.as_ref().map_or("", Ownership::business_unit)
    }

    /// Owner handles, or an empty slice.
    #[must_use]
    pub fn owners(&self) -> &[String] {
        self.ownership
            .as_ref()
            .map(Ownership::owners)
            .unwrap_or_default()
    }

    /// The analysis configuration, if any.
    #[must_use]
    pub const fn analysis(&self) -> Option<&AnalysisConfig> {
        self.analysis.as_ref()
    }

    /// Decision metric names, or an empty slice.
    #[must_use]
    pub fn decision_metrics(&self) -> &[String] {
        self.analysis
            .as_ref()
            .map(AnalysisConfig::decision_metrics)
            .unwrap_or_default()
    }

    /// Guardrail metric names, or an empty slice.
    #[must_use]
    pub fn guardrail_metrics(&self) -> &[String] {
        self.analysis
            .as_ref()
            .map(AnalysisConfig::guardrail_metrics)
            .unwrap_or_default()
    }

    /// Scorecard template identifier, if configured.
    #[must_use]
    pub fn scorecard_template(&self) -> Option<&str> {
        self.analysis
            .as_ref()
            .and_then(AnalysisConfig::scorecard_template)
    }

    /// Recorded result, if the experiment has ended.
    #[must_use]
    pub fn result(&self) -> Option<ExperimentResult> {
        self.end_state.and_then(|state| state.result())
    }

    /// Derived status (`Running` when no result is recorded).
    #[must_use]
    pub fn status(&self) -> ExperimentStatus {
        ExperimentStatus::from(self.result())
    }

    /// Whether no result has been recorded yet.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.result().is_none()
    }

    /// Showcase vote count (0 when absent).
    #[must_use]
    pub fn votes(&self) -> u32 {
        self.votes.unwrap_or(0)
    }

    /// Lifecycle status (`draft`, `live`, `killed`, ...). Display-only.
    #[must_use]
    pub fn lifecycle_status(&self) -> Option<&str> {
        self.lifecycle_status.as_deref()
    }

    /// Experiment design tag, if recorded.
    #[must_use]
    pub const fn kind(&self) -> Option<&ExperimentKind> {
        self.kind.as_ref()
    }

    /// Start date, if recorded.
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// End date, if recorded.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }
}

impl TryFrom<ExperimentWire> for Experiment {
    type Error = Error;

    fn try_from(wire: ExperimentWire) -> Result<Self> {
        wire.into_experiment()
    }
}

/// Builder for `Experiment`.
#[derive(Debug)]
pub struct ExperimentBuilder {
    record: Experiment,
}

impl ExperimentBuilder {
    /// Create a new builder with the required identifier.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            record: Experiment {
                identifier: identifier.into(),
                name: None,
                hypothesis: None,
                ownership: None,
                analysis: None,
                end_state: None,
                votes: None,
                lifecycle_status: None,
                kind: None,
                start_date: None,
                end_date: None,
            },
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.record.name = Some(name.into());
        self
    }

    /// Set the hypothesis block.
    #[must_use]
    pub fn hypothesis(mut self, hypothesis: Hypothesis) -> Self {
        self.record.hypothesis = Some(hypothesis);
        self
    }

    /// Set the owning business unit and owner handles.
    #[must_use]
    pub fn ownership<I, S>(mut self, business_unit: impl Into<String>, owners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record.ownership = Some(Ownership::new(
            business_unit,
            owners.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Set the analysis configuration.
    #[must_use]
    pub fn analysis(mut self, analysis: AnalysisConfig) -> Self {
        self.record.analysis = Some(analysis);
        self
    }

    /// Record a final result.
    #[must_use]
    pub fn result(mut self, result: ExperimentResult) -> Self {
        self.record.end_state = Some(EndState::new(result));
        self
    }

    /// Set the showcase vote count.
    #[must_use]
    pub const fn votes(mut self, votes: u32) -> Self {
        self.record.votes = Some(votes);
        self
    }

    /// Set the lifecycle status.
    #[must_use]
    pub fn lifecycle_status(mut self, status: impl Into<String>) -> Self {
        self.record.lifecycle_status = Some(status.into());
        self
    }

    /// Set the experiment design tag.
    #[must_use]
    pub fn kind(mut self, kind: impl Into<ExperimentKind>) -> Self {
        self.record.kind = Some(kind.into());
        self
    }

    /// Set the start date.
    #[must_use]
    pub const fn start_date(mut self, date: NaiveDate) -> Self {
        self.record.start_date = Some(date);
        self
    }

    /// Set the end date.
    #[must_use]
    pub const fn end_date(mut self, date: NaiveDate) -> Self {
        self.record.end_date = Some(date);
        self
    }

    /// Build the `Experiment`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingIdentifier`] if the identifier is empty.
    pub fn build(self) -> Result<Experiment> {
        if self.record.identifier.is_empty() {
            return Err(Error::MissingIdentifier);
        }
        Ok(self.record)
    }
}
