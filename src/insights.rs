//! FOS insights: metric usage patterns and design guidance
//!
//! Reference tables distilled from the 2026 front-of-site experiments, shown
//! next to the recommender.

use serde::Serialize;

use crate::experiment::ExperimentKind;

/// How a metric has performed as a decision metric across FOS experiments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricInsight {
    /// Metric identifier.
    pub name: &'static str,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Number of experiments using it.
    pub usage: u32,
    /// Share of those experiments that won, in percent.
    pub win_rate: u8,
    /// Typical run time.
    pub avg_duration: &'static str,
    /// What it measures.
    pub description: &'static str,
    /// Experiment families it suits.
    pub best_for: &'static [&'static str],
}

/// Coarse win-rate bucket used to color the win-rate bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WinRateBand {
    /// Below 50%.
    Low,
    /// 50% to 69%.
    Medium,
    /// 70% and above.
    High,
}

impl WinRateBand {
    /// Band for a win rate in percent.
    #[must_use]
    pub const fn for_rate(win_rate: u8) -> Self {
        if win_rate >= 70 {
            Self::High
        } else if win_rate >= 50 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl MetricInsight {
    /// Win-rate band of this metric.
    #[must_use]
    pub const fn band(&self) -> WinRateBand {
        WinRateBand::for_rate(self.win_rate)
    }
}

static METRIC_INSIGHTS: [MetricInsight; 6] = [
    MetricInsight {
        name: "new_purchase_conversion",
        display_name: "New Purchase Conversion",
        usage: 24,
        win_rate: 68,
        avg_duration: "3-4 weeks",
        description: "Measures the rate at which visitors complete their first purchase",
        best_for: &[
            "SERP experiments",
            "Cart optimizations",
            "Navigation changes",
            "Lead generation",
        ],
    },
    MetricInsight {
        name: "new_purchase_gcr_amt",
        display_name: "New Purchase GCR Amount",
        usage: 12,
        win_rate: 72,
        avg_duration: "4-6 weeks",
        description: "Gross Conversion Revenue from new purchases - revenue impact",
        best_for: &[
            "Pricing experiments",
            "Upsell tests",
            "Premium tier experiments",
            "Domain SERP",
        ],
    },
    MetricInsight {
        name: "new_transaction",
        display_name: "New Transaction",
        usage: 6,
        win_rate: 58,
        avg_duration: "2-3 weeks",
        description: "Number of new transactions completed",
        best_for: &[
            "WAM experiments",
            "Merchandising tests",
            "Quick wins validation",
        ],
    },
    MetricInsight {
        name: "new_wam_gcr",
        display_name: "New WAM GCR",
        usage: 5,
        win_rate: 65,
        avg_duration: "4 weeks",
        description: "Website & Marketing GCR for new purchases",
        best_for: &["WAM pricing", "WAM onboarding", "WAM merchandising"],
    },
    MetricInsight {
        name: "web_domain_units",
        display_name: "Web Domain Units",
        usage: 3,
        win_rate: 45,
        avg_duration: "4-6 weeks",
        description: "Number of domain units sold through web",
        best_for: &[
            "AI domain suggestions",
            "Multi-domain flows",
            "Domain bundling",
        ],
    },
    MetricInsight {
        name: "dbs_refund_rate",
        display_name: "DBS Refund Rate",
        usage: 2,
        win_rate: 82,
        avg_duration: "6-8 weeks",
        description: "Domain Backorder refund rate - quality metric",
        best_for: &["DBS flow improvements", "Quality assurance tests"],
    },
];

/// Metric insights, most used first.
#[must_use]
pub fn metric_insights() -> &'static [MetricInsight] {
    &METRIC_INSIGHTS
}

/// Look up the insight for a metric identifier.
#[must_use]
pub fn metric_insight(name: &str) -> Option<&'static MetricInsight> {
    METRIC_INSIGHTS.iter().find(|insight| insight.name == name)
}

/// When to reach for a given experiment design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeGuidance {
    /// Situations the design suits.
    pub best_for: &'static [&'static str],
    /// Caveats to plan for.
    pub considerations: &'static [&'static str],
}

const AB_GUIDANCE: TypeGuidance = TypeGuidance {
    best_for: &[
        "UI/UX changes on a single element",
        "Copy or CTA text variations",
        "Feature toggles (on/off)",
        "Quick validation tests",
    ],
    considerations: &[
        "Need sufficient traffic for statistical significance",
        "Clear success criteria needed",
        "Typically 2-4 week duration",
    ],
};

const ENDGAME_GUIDANCE: TypeGuidance = TypeGuidance {
    best_for: &[
        "Major feature launches",
        "Multi-variant testing (3+ variants)",
        "Complex user journey changes",
        "Personalization experiments",
    ],
    considerations: &[
        "Longer runtime for stability",
        "Requires robust guardrails",
        "Best for high-traffic pages",
    ],
};

const PRE_POST_GUIDANCE: TypeGuidance = TypeGuidance {
    best_for: &[
        "100% rollout validation",
        "Technical migrations",
        "Compliance/legal changes",
        "When A/B split not possible",
    ],
    considerations: &[
        "Confounding factors possible",
        "Seasonal effects to consider",
        "Need longer observation windows",
    ],
};

impl TypeGuidance {
    /// Guidance for the designs the recommender can suggest; `None` otherwise.
    #[must_use]
    pub const fn for_kind(kind: &ExperimentKind) -> Option<Self> {
        match kind {
            ExperimentKind::AB => Some(AB_GUIDANCE),
            ExperimentKind::Endgame => Some(ENDGAME_GUIDANCE),
            ExperimentKind::PrePost => Some(PRE_POST_GUIDANCE),
            ExperimentKind::Mab | ExperimentKind::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_rate_bands() {
        assert_eq!(WinRateBand::for_rate(82), WinRateBand::High);
        assert_eq!(WinRateBand::for_rate(70), WinRateBand::High);
        assert_eq!(WinRateBand::for_rate(50), WinRateBand::Medium);
        assert_eq!(WinRateBand::for_rate(45), WinRateBand::Low);
    }

    #[test]
    fn test_insights_sorted_by_usage() {
        let usage: Vec<u32> = metric_insights().iter().map(|i| i.usage).collect();
        assert!(usage.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_lookup() {
        let insight = metric_insight("web_domain_units").unwrap();
        assert_eq!(insight.band(), WinRateBand::Low);
        assert!(metric_insight("unknown_metric").is_none());
    }

    #[test]
    fn test_guidance_coverage() {
        assert!(TypeGuidance::for_kind(&ExperimentKind::Endgame).is_some());
        assert!(TypeGuidance::for_kind(&ExperimentKind::Mab).is_none());
        assert!(TypeGuidance::for_kind(&ExperimentKind::from("HOLDOUT")).is_none());
    }
}
