//! Closed and open vocabularies attached to experiment records

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Final outcome recorded in an experiment's end state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentResult {
    /// The experiment met its success criteria.
    Win,
    /// The experiment did not meet its goals.
    Loss,
    /// Results were not statistically significant.
    Inconclusive,
}

impl ExperimentResult {
    /// All results, in display order.
    pub const ALL: [Self; 3] = [Self::Win, Self::Loss, Self::Inconclusive];

    /// Wire name (`win`, `loss`, `inconclusive`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Loss => "loss",
            Self::Inconclusive => "inconclusive",
        }
    }
}

impl fmt::Display for ExperimentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperimentResult {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "win" => Ok(Self::Win),
            "loss" => Ok(Self::Loss),
            "inconclusive" => Ok(Self::Inconclusive),
            other => Err(Error::InvalidInput(format!(
                "unknown experiment result '{other}' (expected win, loss or inconclusive)"
            ))),
        }
    }
}

/// Derived status: the recorded result, or `Running` when there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentStatus {
    /// Ended as a win.
    Win,
    /// Ended as a loss.
    Loss,
    /// Ended without a significant result.
    Inconclusive,
    /// No end state recorded yet.
    Running,
}

impl ExperimentStatus {
    /// Badge label shown on cards and in the detail panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Loss => "Loss",
            Self::Inconclusive => "Inconclusive",
            Self::Running => "Running",
        }
    }

    /// One-line explanation shown in the detail panel's status banner.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Win => "This experiment achieved its success criteria",
            Self::Loss => "This experiment did not meet its goals",
            Self::Inconclusive => "Results were not statistically significant",
            Self::Running => "This experiment is currently active",
        }
    }
}

impl From<Option<ExperimentResult>> for ExperimentStatus {
    fn from(result: Option<ExperimentResult>) -> Self {
        match result {
            Some(ExperimentResult::Win) => Self::Win,
            Some(ExperimentResult::Loss) => Self::Loss,
            Some(ExperimentResult::Inconclusive) => Self::Inconclusive,
            None => Self::Running,
        }
    }
}

/// Experiment design tag. Open vocabulary: unrecognized tags are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExperimentKind {
    /// Controlled A/B split.
    AB,
    /// Staged multi-variant rollout.
    Endgame,
    /// Before/after comparison without a traffic split.
    PrePost,
    /// Multi-armed bandit.
    Mab,
    /// Any other tag.
    Other(String),
}

impl ExperimentKind {
    /// Wire tag (`A/B`, `ENDGAME`, `PRE-POST`, `MAB`, or the verbatim tag).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AB => "A/B",
            Self::Endgame => "ENDGAME",
            Self::PrePost => "PRE-POST",
            Self::Mab => "MAB",
            Self::Other(tag) => tag,
        }
    }

    /// Heading used by the recommendation panel (`A/B` reads "A/B Test").
    #[must_use]
    pub fn heading(&self) -> &str {
        match self {
            Self::AB => "A/B Test",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for ExperimentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ExperimentKind {
    fn from(tag: &str) -> Self {
        match tag {
            "A/B" => Self::AB,
            "ENDGAME" => Self::Endgame,
            "PRE-POST" => Self::PrePost,
            "MAB" => Self::Mab,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ExperimentKind {
    fn from(tag: String) -> Self {
        match Self::from(tag.as_str()) {
            Self::Other(_) => Self::Other(tag),
            known => known,
        }
    }
}

impl From<ExperimentKind> for String {
    fn from(kind: ExperimentKind) -> Self {
        match kind {
            ExperimentKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// Role a metric plays in an experiment's analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricRole {
    /// Primary metric the win/loss call is based on.
    Decision,
    /// Monitored for unacceptable regressions; not used for the call.
    Guardrail,
    /// Reported for context only.
    Informative,
}

impl MetricRole {
    /// Lower-case role tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decision => "decision",
            Self::Guardrail => "guardrail",
            Self::Informative => "informative",
        }
    }
}
