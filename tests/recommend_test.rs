//! Tests for the recommendation rule engine

use experiment_showcase::experiment::{ExperimentKind, MetricRole};
use experiment_showcase::insights::TypeGuidance;
use experiment_showcase::recommend::{
    kind_rules, metric_plan, recommend, Area, Goal, SuggestedMetric, FALLBACK_KIND,
    REVENUE_GUARDRAIL,
};

#[test]
fn test_ai_launch_on_serp_for_revenue() {
    let rec = recommend("Launch AI domain suggestions", Area::Serp, Goal::Revenue);

    assert_eq!(rec.kind, ExperimentKind::Endgame);
    assert_eq!(rec.confidence, 85);
    assert_eq!(rec.estimated_duration, "6-8 weeks");
    assert_eq!(rec.suggested_scorecard, "dpp-e2e");
    assert_eq!(
        rec.metric_labels(),
        ["new_purchase_gcr_amt", "new_purchase_conversion"]
    );
}

#[test]
fn test_button_color_in_cart_for_conversion() {
    let rec = recommend("Change button color", Area::Cart, Goal::Conversion);

    assert_eq!(rec.kind, ExperimentKind::AB);
    assert_eq!(rec.kind.heading(), "A/B Test");
    assert_eq!(rec.confidence, 82);
    assert_eq!(rec.estimated_duration, "3-4 weeks");
    assert_eq!(rec.suggested_scorecard, "cart");
    assert_eq!(
        rec.metric_labels(),
        [
            "new_purchase_conversion",
            "sso_account_creation",
            "new_purchase_gcr_amt (guardrail)",
        ]
    );
    assert_eq!(
        rec.suggested_metrics[2],
        SuggestedMetric {
            name: "new_purchase_gcr_amt",
            role: MetricRole::Guardrail,
        }
    );
}

#[test]
fn test_major_redesign_on_homepage_for_engagement() {
    let rec = recommend(
        "We plan a major redesign with personalization",
        Area::Homepage,
        Goal::Engagement,
    );

    assert_eq!(rec.kind, ExperimentKind::Endgame);
    assert_eq!(rec.confidence, 85);
    assert_eq!(rec.suggested_scorecard, "recore_nba");
    assert_eq!(
        rec.metric_labels(),
        ["new_purchase_conversion", "do_it_for_you_leads"]
    );
    assert_eq!(rec.estimated_duration, "6-8 weeks");
}

#[test]
fn test_simple_cta_text_in_cart_for_revenue() {
    let rec = recommend("simple cta text test", Area::Cart, Goal::Revenue);

    assert_eq!(rec.kind, ExperimentKind::AB);
    assert_eq!(rec.confidence, 82);
    assert_eq!(rec.suggested_scorecard, "cart");
    assert_eq!(
        rec.metric_labels(),
        ["new_purchase_gcr_amt", "new_purchase_conversion"]
    );
    assert!(rec
        .suggested_metrics
        .iter()
        .all(|m| m.role == MetricRole::Decision));
    assert_eq!(rec.estimated_duration, "3-4 weeks");
}

#[test]
fn test_pre_post_keywords() {
    for description in [
        "Database migration",
        "Validate the 100% rollout",
        "Compliance banner",
        "TECHNICAL cleanup",
    ] {
        let rec = recommend(description, Area::Other, Goal::Quality);
        assert_eq!(rec.kind, ExperimentKind::PrePost, "{description}");
        assert_eq!(rec.confidence, 80);
        assert_eq!(rec.estimated_duration, "4-6 weeks");
    }
}

#[test]
fn test_endgame_precedes_pre_post() {
    let rec = recommend("Major migration", Area::Serp, Goal::Conversion);
    assert_eq!(rec.kind, ExperimentKind::Endgame);
}

#[test]
fn test_homepage_and_navigation_ignore_goal() {
    for goal in Goal::ALL {
        let (scorecard, metrics) = metric_plan(Area::Homepage, goal);
        assert_eq!(scorecard, "recore_nba");
        assert_eq!(metrics, ["new_purchase_conversion", "do_it_for_you_leads"]);

        let (scorecard, metrics) = metric_plan(Area::Navigation, goal);
        assert_eq!(scorecard, "fos-nav");
        assert_eq!(metrics, ["new_purchase_conversion", "web_visitor_shopper_rate"]);
    }
}

#[test]
fn test_serp_engagement_uses_domain_units() {
    let rec = recommend("Tweak filters", Area::Serp, Goal::Engagement);
    assert_eq!(
        rec.metric_names(),
        ["new_purchase_conversion", "web_domain_units"]
    );
}

#[test]
fn test_guardrail_only_for_conversion_goal() {
    for area in Area::ALL {
        for goal in Goal::ALL {
            let rec = recommend("copy change", area, goal);
            let guardrails: Vec<_> = rec
                .suggested_metrics
                .iter()
                .filter(|m| m.role == MetricRole::Guardrail)
                .collect();

            if goal == Goal::Conversion {
                assert_eq!(guardrails.len(), 1, "{area}/{goal}");
                assert_eq!(guardrails[0].name, REVENUE_GUARDRAIL);
            } else {
                assert!(guardrails.is_empty(), "{area}/{goal}");
            }
        }
    }
}

#[test]
fn test_metrics_independent_of_kind() {
    let endgame = recommend("major redesign", Area::Cart, Goal::Revenue);
    let ab = recommend("button color", Area::Cart, Goal::Revenue);
    assert_ne!(endgame.kind, ab.kind);
    assert_eq!(endgame.suggested_metrics, ab.suggested_metrics);
    assert_eq!(endgame.suggested_scorecard, ab.suggested_scorecard);
}

#[test]
fn test_deterministic() {
    let first = recommend("Personalization of the hero", Area::Homepage, Goal::Engagement);
    let second = recommend("Personalization of the hero", Area::Homepage, Goal::Engagement);
    assert_eq!(first, second);
}

#[test]
fn test_rule_table_is_data() {
    let rules = kind_rules();
    assert_eq!(rules.len(), 2);
    assert!(rules[0].keywords.contains(&"multiple variant"));
    assert!(rules[1].keywords.contains(&"100%"));
    assert_eq!(FALLBACK_KIND.kind, ExperimentKind::AB);
}

#[test]
fn test_every_recommended_kind_has_guidance() {
    let kinds = kind_rules()
        .iter()
        .map(|rule| &rule.outcome.kind)
        .chain(std::iter::once(&FALLBACK_KIND.kind));
    for kind in kinds {
        assert!(TypeGuidance::for_kind(kind).is_some(), "{kind}");
    }
}
