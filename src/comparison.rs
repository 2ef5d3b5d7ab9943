//! Metrics comparison: static analysis results for finished experiments
//!
//! P-values and lifts are fixture values recorded by the analysis platform;
//! nothing here computes statistics. The module only classifies and formats
//! them for the comparison table.

use serde::{Deserialize, Serialize};

use crate::experiment::{ExperimentResult, MetricRole};

/// Result of one metric in a control/treatment comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    /// Metric identifier.
    pub metric_id: String,
    /// Human-readable metric name.
    pub metric_name: String,
    /// Control arm value.
    pub control_value: f64,
    /// Treatment arm value.
    pub treatment_value: f64,
    /// Relative difference of treatment vs control (0.05 = +5%).
    pub relative_difference: f64,
    /// Reported p-value.
    pub p_value: f64,
    /// Whether the platform flagged the difference as significant.
    pub is_significant: bool,
    /// Role of the metric in the analysis.
    pub category: MetricRole,
}

/// Direction of a relative difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lift {
    /// Positive lift.
    Up,
    /// Negative lift.
    Down,
    /// No change.
    Flat,
}

impl MetricResult {
    /// Direction of the relative difference.
    #[must_use]
    pub fn lift(&self) -> Lift {
        if self.relative_difference > 0.0 {
            Lift::Up
        } else if self.relative_difference < 0.0 {
            Lift::Down
        } else {
            Lift::Flat
        }
    }

    /// Signed relative difference, e.g. `+89.20%`.
    #[must_use]
    pub fn formatted_lift(&self) -> String {
        format_percent(self.relative_difference, true)
    }

    /// Significance badge text: `Significant` or `Not Sig (p=0.58)`.
    #[must_use]
    pub fn significance_label(&self) -> String {
        if self.is_significant {
            "Significant".to_string()
        } else {
            format!("Not Sig (p={:.2})", self.p_value)
        }
    }
}

/// Control and treatment sample sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSize {
    /// Users in the control arm.
    pub control: u64,
    /// Users in the treatment arm.
    pub treatment: u64,
}

/// Analysis summary of one experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentMetrics {
    /// Experiment identifier.
    pub experiment_id: String,
    /// Short display name.
    pub experiment_name: String,
    /// Final result, if called.
    #[serde(default)]
    pub result: Option<ExperimentResult>,
    /// Run length in days.
    pub duration_days: f64,
    /// Arm sizes.
    pub sample_size: SampleSize,
    /// Decision metric, if analyzed.
    #[serde(default)]
    pub decision_metric: Option<MetricResult>,
    /// Guardrail metrics.
    #[serde(default)]
    pub guardrail_metrics: Vec<MetricResult>,
}

impl ExperimentMetrics {
    /// Users across both arms.
    #[must_use]
    pub const fn total_users(&self) -> u64 {
        self.sample_size.control + self.sample_size.treatment
    }

    /// Guardrails shown in the compact table (the first two).
    #[must_use]
    pub fn headline_guardrails(&self) -> &[MetricResult] {
        &self.guardrail_metrics[..self.guardrail_metrics.len().min(2)]
    }

    /// Guardrails that moved against the treatment with significance.
    pub fn breached_guardrails(&self) -> impl Iterator<Item = &MetricResult> {
        self.guardrail_metrics
            .iter()
            .filter(|metric| metric.is_significant && metric.lift() == Lift::Down)
    }
}

/// Format a ratio as a percentage with two decimals.
///
/// Relative values get an explicit `+` sign when non-negative.
///
/// ```rust
/// use experiment_showcase::comparison::format_percent;
///
/// assert_eq!(format_percent(0.05969, true), "+5.97%");
/// assert_eq!(format_percent(-0.0163, true), "-1.63%");
/// assert_eq!(format_percent(0.27123, false), "27.12%");
/// ```
#[must_use]
pub fn format_percent(value: f64, relative: bool) -> String {
    let sign = if relative && value >= 0.0 { "+" } else { "" };
    format!("{sign}{:.2}%", value * 100.0)
}

/// Compact number formatting used by the comparison cells.
///
/// ```rust
/// use experiment_showcase::comparison::format_number;
///
/// assert_eq!(format_number(437_480.0), "437.5K");
/// assert_eq!(format_number(2_500_000.0), "2.5M");
/// assert_eq!(format_number(21.91088), "21.91");
/// assert_eq!(format_number(0.00593), "5.93e-3");
/// assert_eq!(format_number(0.27123), "27.12%");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if value > 0.0 && value < 0.01 {
        format!("{value:.2e}")
    } else if value >= 1.0 {
        format!("{value:.2}")
    } else {
        format!("{:.2}%", value * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(relative_difference: f64, is_significant: bool) -> MetricResult {
        MetricResult {
            metric_id: "m".to_string(),
            metric_name: "M".to_string(),
            control_value: 1.0,
            treatment_value: 1.0,
            relative_difference,
            p_value: 0.57956,
            is_significant,
            category: MetricRole::Guardrail,
        }
    }

    #[test]
    fn test_lift_direction() {
        assert_eq!(metric(0.1, false).lift(), Lift::Up);
        assert_eq!(metric(-0.1, false).lift(), Lift::Down);
        assert_eq!(metric(0.0, false).lift(), Lift::Flat);
    }

    #[test]
    fn test_significance_label() {
        assert_eq!(metric(0.1, true).significance_label(), "Significant");
        assert_eq!(metric(0.1, false).significance_label(), "Not Sig (p=0.58)");
    }

    #[test]
    fn test_zero_relative_gets_plus_sign() {
        assert_eq!(format_percent(0.0, true), "+0.00%");
    }

    #[test]
    fn test_headline_guardrails_caps_at_two() {
        let summary = ExperimentMetrics {
            experiment_id: "x".to_string(),
            experiment_name: "X".to_string(),
            result: None,
            duration_days: 1.0,
            sample_size: SampleSize {
                control: 10,
                treatment: 12,
            },
            decision_metric: None,
            guardrail_metrics: vec![metric(-0.2, true), metric(0.1, true), metric(0.3, false)],
        };
        assert_eq!(summary.headline_guardrails().len(), 2);
        assert_eq!(summary.total_users(), 22);
        assert_eq!(summary.breached_guardrails().count(), 1);
    }
}
