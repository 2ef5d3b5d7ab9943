//! View models handed to the renderer

use serde::Serialize;
use url::Url;

use super::Tab;
use crate::experiment::{Experiment, ExperimentStatus};
use crate::query::FilterCriteria;
use crate::stats::ExperimentStats;

/// Everything the list page renders for the active tab.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView<'a> {
    /// Active tab.
    pub tab: Tab,
    /// Page heading.
    pub title: &'static str,
    /// Filtered records, in display order.
    pub experiments: Vec<&'a Experiment>,
    /// Summary over the whole tab collection, not the filtered subset.
    pub stats: ExperimentStats,
    /// Business-unit dropdown options.
    pub business_units: Vec<String>,
    /// Filter bar state the list was computed with.
    pub filters: &'a FilterCriteria,
    /// Refresh in flight.
    pub loading: bool,
}

impl DashboardView<'_> {
    /// Whether the "no experiments found" branch (with its reset action) applies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }
}

/// The detail overlay for one record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView<'a> {
    /// The open record.
    pub experiment: &'a Experiment,
    /// Derived status.
    pub status: ExperimentStatus,
    /// Badge text.
    pub status_label: &'static str,
    /// Banner text.
    pub status_description: &'static str,
    /// Outbound link to the experiment platform.
    pub link: Url,
}

impl<'a> DetailView<'a> {
    pub(super) fn new(experiment: &'a Experiment, link: Url) -> Self {
        let status = experiment.status();
        Self {
            experiment,
            status,
            status_label: status.label(),
            status_description: status.description(),
            link,
        }
    }
}
