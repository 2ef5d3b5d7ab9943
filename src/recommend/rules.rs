//! Ordered keyword rules selecting the experiment design

use crate::experiment::ExperimentKind;

/// What a matching rule recommends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindOutcome {
    /// Suggested design.
    pub kind: ExperimentKind,
    /// Confidence in percent.
    pub confidence: u8,
    /// Fixed rationale.
    pub reason: &'static str,
    /// Expected run time.
    pub duration: &'static str,
}

/// A keyword rule: fires when the lower-cased description contains any keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindRule {
    /// Lower-case substrings that trigger the rule.
    pub keywords: &'static [&'static str],
    /// Recommendation when triggered.
    pub outcome: KindOutcome,
}

impl KindRule {
    /// Whether `description` (already lower-cased) triggers this rule.
    #[must_use]
    pub fn matches(&self, description: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| description.contains(keyword))
    }
}

static KIND_RULES: [KindRule; 2] = [
    KindRule {
        keywords: &[
            "launch",
            "major",
            "redesign",
            "multiple variant",
            "personalization",
            "ai",
        ],
        outcome: KindOutcome {
            kind: ExperimentKind::Endgame,
            confidence: 85,
            reason: "ENDGAME is recommended for major launches and multi-variant experiments. \
                     It provides better control and allows for gradual rollout.",
            duration: "6-8 weeks",
        },
    },
    KindRule {
        keywords: &["migration", "100%", "rollout", "technical", "compliance"],
        outcome: KindOutcome {
            kind: ExperimentKind::PrePost,
            confidence: 80,
            reason: "PRE-POST analysis is ideal when you cannot split traffic or need to \
                     validate a 100% rollout.",
            duration: "4-6 weeks",
        },
    },
];

/// Outcome when no rule fires.
pub static FALLBACK_KIND: KindOutcome = KindOutcome {
    kind: ExperimentKind::AB,
    confidence: 82,
    reason: "A/B test is the gold standard for controlled experiments. Based on FOS data, \
             A/B tests have a 68% win rate for similar experiments.",
    duration: "3-4 weeks",
};

/// The ordered rule table. Earlier rules take precedence.
#[must_use]
pub fn kind_rules() -> &'static [KindRule] {
    &KIND_RULES
}

/// First matching rule's outcome, or [`FALLBACK_KIND`].
pub(super) fn select_kind(description: &str) -> &'static KindOutcome {
    KIND_RULES
        .iter()
        .find(|rule| rule.matches(description))
        .map_or(&FALLBACK_KIND, |rule| &rule.outcome)
}
