//! Tests for the filter/sort engine against the built-in datasets

use experiment_showcase::experiment::{Experiment, ExperimentResult};
use experiment_showcase::fixtures;
use experiment_showcase::query::{
    filter_experiments, locale_cmp, FilterCriteria, SortKey, StatusFilter,
};

fn ids<'a>(experiments: &[&'a Experiment]) -> Vec<&'a str> {
    experiments.iter().map(|e| e.identifier()).collect()
}

#[test]
fn test_identity_filter_returns_all_name_sorted() {
    let catalog = fixtures::my_experiments();
    let result = filter_experiments(catalog.experiments(), &FilterCriteria::default());

    assert_eq!(result.len(), catalog.len());
    for pair in result.windows(2) {
        assert!(locale_cmp(pair[0].display_name(), pair[1].display_name()).is_le());
    }
    assert_eq!(result[0].identifier(), "airo_plus_pricing_experiment");
}

#[test]
fn test_win_filter_on_my_experiments() {
    let catalog = fixtures::my_experiments();
    let criteria = FilterCriteria::default().with_status(StatusFilter::Win);
    let result = filter_experiments(catalog.experiments(), &criteria);

    let expected = catalog
        .iter()
        .filter(|e| e.result() == Some(ExperimentResult::Win))
        .count();
    assert_eq!(result.len(), expected);
    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|e| e.result() == Some(ExperimentResult::Win)));
}

#[test]
fn test_running_filter() {
    let catalog = fixtures::my_experiments();
    let criteria = FilterCriteria::default().with_status(StatusFilter::Running);
    let result = filter_experiments(catalog.experiments(), &criteria);

    assert_eq!(ids(&result), ["mwp_heuristics_test", "test_venkat_experiment"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let catalog = fixtures::fos_experiments();
    let lower = filter_experiments(
        catalog.experiments(),
        &FilterCriteria::default().with_search("serp"),
    );
    let upper = filter_experiments(
        catalog.experiments(),
        &FilterCriteria::default().with_search("SeRP"),
    );

    assert_eq!(ids(&lower), ids(&upper));
    assert_eq!(lower.len(), 4);
}

#[test]
fn test_search_matches_hypothesis_change() {
    let catalog = fixtures::my_experiments();
    let criteria = FilterCriteria::default().with_search("PREMIUM PRICING TIER");
    let result = filter_experiments(catalog.experiments(), &criteria);

    assert_eq!(
        ids(&result),
        [
            "wam_heuristics_pricing_experiment_pre_post",
            "wam_heuristics_pricing_experiment",
        ]
    );
}

#[test]
fn test_search_matches_business_unit() {
    let catalog = fixtures::my_experiments();
    let criteria = FilterCriteria::default().with_search("independents");
    let result = filter_experiments(catalog.experiments(), &criteria);

    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|e| e.business_unit() == "US Independents"));
}

#[test]
fn test_business_unit_is_exact() {
    let catalog = fixtures::fos_experiments();
    let exact = filter_experiments(
        catalog.experiments(),
        &FilterCriteria::default().with_business_unit("CMO"),
    );
    let partial = filter_experiments(
        catalog.experiments(),
        &FilterCriteria::default().with_business_unit("cmo"),
    );

    assert_eq!(exact.len(), 6);
    assert!(partial.is_empty());
}

#[test]
fn test_conjunctive_constraints() {
    let catalog = fixtures::fos_experiments();
    let criteria = FilterCriteria::default()
        .with_search("cart")
        .with_status(StatusFilter::Loss)
        .with_business_unit("CMO");
    let result = filter_experiments(catalog.experiments(), &criteria);

    assert_eq!(ids(&result), ["cart_discount_additional_m365"]);
}

#[test]
fn test_no_match_is_empty_not_error() {
    let catalog = fixtures::fos_experiments();
    let criteria = FilterCriteria::default().with_search("no such experiment anywhere");
    assert!(filter_experiments(catalog.experiments(), &criteria).is_empty());
}

#[test]
fn test_date_sort_keeps_source_order() {
    let catalog = fixtures::fos_experiments();
    let criteria = FilterCriteria::default().sorted_by(SortKey::Date);
    let result = filter_experiments(catalog.experiments(), &criteria);

    let source: Vec<&str> = catalog.iter().map(Experiment::identifier).collect();
    assert_eq!(ids(&result), source);
}

#[test]
fn test_votes_sort_with_all_zero_keeps_source_order() {
    // None of the built-in records carry votes
    let catalog = fixtures::my_experiments();
    let criteria = FilterCriteria::default().sorted_by(SortKey::Votes);
    let result = filter_experiments(catalog.experiments(), &criteria);

    let source: Vec<&str> = catalog.iter().map(Experiment::identifier).collect();
    assert_eq!(ids(&result), source);
}

#[test]
fn test_filter_does_not_mutate_input() {
    let catalog = fixtures::fos_experiments();
    let before = catalog.experiments().to_vec();
    let _ = filter_experiments(
        catalog.experiments(),
        &FilterCriteria::default().sorted_by(SortKey::Name),
    );
    assert_eq!(catalog.experiments(), before.as_slice());
}

#[test]
fn test_criteria_from_json() {
    let criteria: FilterCriteria =
        serde_json::from_str(r#"{"status": "running", "sortBy": "votes"}"#).unwrap();
    assert_eq!(criteria.status, StatusFilter::Running);
    assert_eq!(criteria.sort_by, SortKey::Votes);
    assert_eq!(criteria.search, "");
}
