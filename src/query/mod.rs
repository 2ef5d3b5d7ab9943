//! Filter/Sort engine for the experiment list view
//!
//! ## Matching (all conjunctive)
//!
//! - **Search**: case-insensitive substring of identifier, name, hypothesis
//!   change, hypothesis expectation or business unit
//! - **Status**: `all`, `running` (no recorded result), or an exact result
//! - **Business unit**: exact match when set
//!
//! ## Ordering
//!
//! Sorts are stable. `votes` is descending, `name` is ascending by
//! [`locale_cmp`], and `date` passes records through in source order.

mod collate;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::experiment::{Experiment, ExperimentResult};
use crate::{Error, Result};

pub use collate::locale_cmp;

/// Status constraint of the filter bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// No constraint.
    #[default]
    All,
    /// Ended as a win.
    Win,
    /// Ended as a loss.
    Loss,
    /// Ended without a significant result.
    Inconclusive,
    /// No result recorded.
    Running,
}

impl StatusFilter {
    /// All options, in filter-bar order.
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Win,
        Self::Loss,
        Self::Inconclusive,
        Self::Running,
    ];

    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Win => "win",
            Self::Loss => "loss",
            Self::Inconclusive => "inconclusive",
            Self::Running => "running",
        }
    }

    /// Filter-bar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Win => "Wins",
            Self::Loss => "Losses",
            Self::Inconclusive => "Inconclusive",
            Self::Running => "Running",
        }
    }

    /// Whether `experiment` satisfies this constraint.
    #[must_use]
    pub fn matches(self, experiment: &Experiment) -> bool {
        let result = experiment.result();
        match self {
            Self::All => true,
            Self::Running => result.is_none(),
            Self::Win => result == Some(ExperimentResult::Win),
            Self::Loss => result == Some(ExperimentResult::Loss),
            Self::Inconclusive => result == Some(ExperimentResult::Inconclusive),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "unknown status filter '{s}' (expected all, win, loss, inconclusive or running)"
                ))
            })
    }
}

/// Sort order of the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most votes first.
    Votes,
    /// Display name, ascending.
    #[default]
    Name,
    /// Offered by the filter bar but has no comparator: source order is kept.
    Date,
}

impl SortKey {
    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Votes => "votes",
            Self::Name => "name",
            Self::Date => "date",
        }
    }

    /// Stable in-place sort of `experiments` by this key.
    pub fn sort(self, experiments: &mut [&Experiment]) {
        match self {
            Self::Votes => experiments.sort_by(|a, b| b.votes().cmp(&a.votes())),
            Self::Name => {
                experiments.sort_by(|a, b| locale_cmp(a.display_name(), b.display_name()));
            }
            // TODO: pick start vs end date once the dashboard defines "date" ordering
            Self::Date => {}
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "votes" => Ok(Self::Votes),
            "name" => Ok(Self::Name),
            "date" => Ok(Self::Date),
            other => Err(Error::InvalidInput(format!(
                "unknown sort key '{other}' (expected votes, name or date)"
            ))),
        }
    }
}

/// Filter bar state. `Default` is the reset target
/// (`search = ""`, `status = all`, `business unit = ""`, `sort = name`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Free-text search; empty means no constraint.
    pub search: String,
    /// Status constraint.
    pub status: StatusFilter,
    /// Exact business unit; empty means no constraint.
    pub business_unit: String,
    /// Sort order.
    pub sort_by: SortKey,
}

impl FilterCriteria {
    /// Set the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the status constraint.
    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Set the business unit constraint.
    #[must_use]
    pub fn with_business_unit(mut self, business_unit: impl Into<String>) -> Self {
        self.business_unit = business_unit.into();
        self
    }

    /// Set the sort order.
    #[must_use]
    pub const fn sorted_by(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Whether any constraint narrows the list (sort order does not count).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.status != StatusFilter::All || !self.business_unit.is_empty()
    }

    /// Whether `experiment` passes every constraint.
    #[must_use]
    pub fn matches(&self, experiment: &Experiment) -> bool {
        self.matches_with_needle(experiment, &self.search.to_lowercase())
    }

    /// `needle` is the already lower-cased search text.
    fn matches_with_needle(&self, experiment: &Experiment, needle: &str) -> bool {
        matches_search(experiment, needle)
            && self.status.matches(experiment)
            && (self.business_unit.is_empty() || experiment.business_unit() == self.business_unit)
    }
}

fn matches_search(experiment: &Experiment, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        experiment.identifier(),
        experiment.name().unwrap_or_default(),
        experiment.hypothesis_change(),
        experiment.hypothesis_expectation(),
        experiment.business_unit(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Apply `criteria` to `experiments`, returning matching records in sorted order.
///
/// The input is never reordered or modified.
///
/// ## Example
///
/// ```rust
/// use experiment_showcase::fixtures;
/// use experiment_showcase::query::{filter_experiments, FilterCriteria, SortKey, StatusFilter};
///
/// let catalog = fixtures::fos_experiments();
/// let criteria = FilterCriteria::default()
///     .with_search("serp")
///     .with_status(StatusFilter::Running)
///     .sorted_by(SortKey::Name);
///
/// let running_serp = filter_experiments(catalog.experiments(), &criteria);
/// assert!(running_serp.iter().all(|e| e.is_running()));
/// ```
#[must_use]
pub fn filter_experiments<'a>(
    experiments: &'a [Experiment],
    criteria: &FilterCriteria,
) -> Vec<&'a Experiment> {
    let needle = criteria.search.to_lowercase();

    let mut result: Vec<&Experiment> = experiments
        .iter()
        .filter(|experiment| criteria.matches_with_needle(experiment, &needle))
        .collect();

    criteria.sort_by.sort(&mut result);

    debug!(
        input = experiments.len(),
        matched = result.len(),
        status = %criteria.status,
        sort = %criteria.sort_by,
        "filtered experiments"
    );
    result
}
