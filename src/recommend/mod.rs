//! Recommendation rule engine
//!
//! Suggests an experiment design, metrics, scorecard and duration from a
//! free-text description plus the page area and primary goal.
//!
//! ```text
//! description ──► kind rules (first match wins) ──► kind, confidence, reason, duration
//! area, goal  ──► metric plan                  ──► scorecard, metrics (+ guardrail)
//! ```
//!
//! The two halves are independent: the kind never influences the metrics.

mod rules;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::experiment::{ExperimentKind, MetricRole};
use crate::{Error, Result};

pub use rules::{kind_rules, KindOutcome, KindRule, FALLBACK_KIND};

/// Metric that a conversion-goal plan always guards unless it already decides on it.
pub const REVENUE_GUARDRAIL: &str = "new_purchase_gcr_amt";

/// Page area the experiment targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Area {
    /// Domain search results page.
    #[default]
    Serp,
    /// Shopping cart.
    Cart,
    /// Homepage.
    Homepage,
    /// Site navigation.
    Navigation,
    /// Anything else.
    Other,
}

impl Area {
    /// All areas, in selector order.
    pub const ALL: [Self; 5] = [
        Self::Serp,
        Self::Cart,
        Self::Homepage,
        Self::Navigation,
        Self::Other,
    ];

    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Serp => "serp",
            Self::Cart => "cart",
            Self::Homepage => "homepage",
            Self::Navigation => "navigation",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Area {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|area| area.as_str() == s)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "unknown area '{s}' (expected serp, cart, homepage, navigation or other)"
                ))
            })
    }
}

/// Primary goal of the experiment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// More purchases.
    #[default]
    Conversion,
    /// More revenue per purchase.
    Revenue,
    /// Deeper engagement.
    Engagement,
    /// Better quality (refunds, support).
    Quality,
}

impl Goal {
    /// All goals, in selector order.
    pub const ALL: [Self; 4] = [
        Self::Conversion,
        Self::Revenue,
        Self::Engagement,
        Self::Quality,
    ];

    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conversion => "conversion",
            Self::Revenue => "revenue",
            Self::Engagement => "engagement",
            Self::Quality => "quality",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == s)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "unknown goal '{s}' (expected conversion, revenue, engagement or quality)"
                ))
            })
    }
}

/// A suggested metric and the role it should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SuggestedMetric {
    /// Metric identifier.
    pub name: &'static str,
    /// Decision or guardrail.
    pub role: MetricRole,
}

impl SuggestedMetric {
    /// A decision metric.
    #[must_use]
    pub const fn decision(name: &'static str) -> Self {
        Self {
            name,
            role: MetricRole::Decision,
        }
    }

    /// A guardrail metric.
    #[must_use]
    pub const fn guardrail(name: &'static str) -> Self {
        Self {
            name,
            role: MetricRole::Guardrail,
        }
    }
}

/// Renders as the metric name, with ` (guardrail)` appended for guardrails.
impl fmt::Display for SuggestedMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            MetricRole::Guardrail => write!(f, "{} (guardrail)", self.name),
            _ => f.write_str(self.name),
        }
    }
}

/// The engine's suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Suggested experiment design.
    #[serde(rename = "type")]
    pub kind: ExperimentKind,
    /// Confidence in percent.
    pub confidence: u8,
    /// Fixed rationale for the chosen design.
    pub reason: &'static str,
    /// Metrics to configure, decision metrics first.
    pub suggested_metrics: Vec<SuggestedMetric>,
    /// Scorecard template identifier.
    pub suggested_scorecard: &'static str,
    /// Expected run time.
    pub estimated_duration: &'static str,
}

impl Recommendation {
    /// Metric names with the guardrail annotation applied, for display.
    #[must_use]
    pub fn metric_labels(&self) -> Vec<String> {
        self.suggested_metrics
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Metric identifiers only.
    #[must_use]
    pub fn metric_names(&self) -> Vec<&'static str> {
        self.suggested_metrics.iter().map(|metric| metric.name).collect()
    }
}

const CONVERSION_ONLY: &[&str] = &["new_purchase_conversion"];
const REVENUE_FIRST: &[&str] = &["new_purchase_gcr_amt", "new_purchase_conversion"];
const SERP_DISCOVERY: &[&str] = &["new_purchase_conversion", "web_domain_units"];
const CART_ACCOUNTS: &[&str] = &["new_purchase_conversion", "sso_account_creation"];
const HOMEPAGE_LEADS: &[&str] = &["new_purchase_conversion", "do_it_for_you_leads"];
const NAVIGATION_SHOPPERS: &[&str] = &["new_purchase_conversion", "web_visitor_shopper_rate"];

/// Scorecard and decision metrics for an area/goal pair.
///
/// Only the SERP and cart plans depend on the goal.
#[must_use]
pub const fn metric_plan(area: Area, goal: Goal) -> (&'static str, &'static [&'static str]) {
    match (area, goal) {
        (Area::Serp, Goal::Conversion) => ("dpp-e2e", CONVERSION_ONLY),
        (Area::Serp, Goal::Revenue) => ("dpp-e2e", REVENUE_FIRST),
        (Area::Serp, _) => ("dpp-e2e", SERP_DISCOVERY),
        (Area::Cart, Goal::Revenue) => ("cart", REVENUE_FIRST),
        (Area::Cart, _) => ("cart", CART_ACCOUNTS),
        (Area::Homepage, _) => ("recore_nba", HOMEPAGE_LEADS),
        (Area::Navigation, _) => ("fos-nav", NAVIGATION_SHOPPERS),
        (Area::Other, _) => ("dpp-e2e", CONVERSION_ONLY),
    }
}

/// Recommend an experiment design for `description` in `area` aiming at `goal`.
///
/// Deterministic and total: an empty description is accepted and falls
/// through to the A/B rule.
///
/// ## Example
///
/// ```rust
/// use experiment_showcase::experiment::ExperimentKind;
/// use experiment_showcase::recommend::{recommend, Area, Goal};
///
/// let rec = recommend("Technical migration of checkout", Area::Cart, Goal::Conversion);
/// assert_eq!(rec.kind, ExperimentKind::PrePost);
/// assert_eq!(rec.suggested_scorecard, "cart");
/// assert_eq!(
///     rec.metric_labels(),
///     ["new_purchase_conversion", "sso_account_creation", "new_purchase_gcr_amt (guardrail)"]
/// );
/// ```
#[must_use]
pub fn recommend(description: &str, area: Area, goal: Goal) -> Recommendation {
    let outcome = rules::select_kind(&description.to_lowercase());
    let (scorecard, decision_metrics) = metric_plan(area, goal);

    let mut suggested_metrics: Vec<SuggestedMetric> = decision_metrics
        .iter()
        .copied()
        .map(SuggestedMetric::decision)
        .collect();
    if goal == Goal::Conversion && !decision_metrics.contains(&REVENUE_GUARDRAIL) {
        suggested_metrics.push(SuggestedMetric::guardrail(REVENUE_GUARDRAIL));
    }

    debug!(
        kind = %outcome.kind,
        %area,
        %goal,
        metrics = suggested_metrics.len(),
        "generated recommendation"
    );

    Recommendation {
        kind: outcome.kind.clone(),
        confidence: outcome.confidence,
        reason: outcome.reason,
        suggested_metrics,
        suggested_scorecard: scorecard,
        estimated_duration: outcome.duration,
    }
}
