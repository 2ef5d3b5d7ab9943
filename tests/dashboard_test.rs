//! Presentation shell tests: transitions, views and the simulated refresh

use std::sync::Arc;
use std::time::Duration;

use experiment_showcase::config::DashboardConfig;
use experiment_showcase::dashboard::{Dashboard, DashboardState, DetailPanel, Tab};
use experiment_showcase::experiment::{ExperimentCatalog, ExperimentStatus};
use experiment_showcase::query::{FilterCriteria, SortKey, StatusFilter};
use experiment_showcase::recommend::{Area, Goal};
use experiment_showcase::{fixtures, Error};

// ============================================================================
// Transitions
// ============================================================================

#[test]
fn test_initial_state() {
    let dashboard = Dashboard::new();
    assert_eq!(dashboard.state(), &DashboardState::default());
    assert_eq!(dashboard.tab(), Tab::MyExperiments);
    assert!(!dashboard.is_loading());
}

#[test]
fn test_tab_counts() {
    let dashboard = Dashboard::new();
    assert_eq!(
        dashboard.tab_counts(),
        [(Tab::MyExperiments, 8), (Tab::Fos2026, 14)]
    );
}

#[test]
fn test_select_tab_switches_collection_and_resets() {
    let mut dashboard = Dashboard::new();
    dashboard.set_filters(
        FilterCriteria::default()
            .with_search("wam")
            .sorted_by(SortKey::Votes),
    );
    dashboard.open_detail("wam_in_app_ftp_test").unwrap();

    dashboard.select_tab(Tab::Fos2026);

    assert_eq!(dashboard.tab(), Tab::Fos2026);
    assert_eq!(dashboard.filters(), &FilterCriteria::default());
    assert_eq!(dashboard.state().detail, DetailPanel::Closed);
    assert_eq!(dashboard.view().experiments.len(), 14);
}

#[test]
fn test_open_detail_scoped_to_active_tab() {
    let mut dashboard = Dashboard::new();
    // FOS record while "my experiments" is active
    let err = dashboard.open_detail("cart_abandon_leadgen_intl").unwrap_err();
    assert!(matches!(err, Error::UnknownExperiment(_)));
    assert!(err.to_string().contains("cart_abandon_leadgen_intl"));

    dashboard.select_tab(Tab::Fos2026);
    dashboard.open_detail("cart_abandon_leadgen_intl").unwrap();
    assert_eq!(
        dashboard.state().detail.open_id(),
        Some("cart_abandon_leadgen_intl")
    );
}

#[test]
fn test_close_detail_is_idempotent() {
    let mut dashboard = Dashboard::new();
    dashboard.close_detail();
    dashboard.open_detail("mwp_heuristics_test").unwrap();
    dashboard.close_detail();
    dashboard.close_detail();
    assert!(dashboard.detail().unwrap().is_none());
}

#[test]
fn test_clear_filters_restores_defaults() {
    let mut dashboard = Dashboard::new();
    dashboard.set_filters(FilterCriteria::default().with_search("nothing matches this"));
    assert!(dashboard.view().is_empty());

    dashboard.clear_filters();
    let view = dashboard.view();
    assert!(!view.is_empty());
    assert_eq!(view.experiments.len(), 8);
    assert!(!view.filters.is_active());
}

#[test]
fn test_filters_do_not_close_detail() {
    let mut dashboard = Dashboard::new();
    dashboard.open_detail("mwp_heuristics_test").unwrap();
    dashboard.set_filters(FilterCriteria::default().with_status(StatusFilter::Loss));
    assert!(dashboard.state().detail.is_open());
}

// ============================================================================
// Views
// ============================================================================

#[test]
fn test_stats_cover_whole_tab_not_filtered_subset() {
    let mut dashboard = Dashboard::new();
    dashboard.set_filters(FilterCriteria::default().with_status(StatusFilter::Loss));

    let view = dashboard.view();
    assert_eq!(view.experiments.len(), 2);
    assert_eq!(view.stats.total, 8);
    assert_eq!(view.title, "Your Experiments");
}

#[test]
fn test_business_unit_options() {
    let dashboard = Dashboard::new();
    assert_eq!(
        dashboard.view().business_units,
        [
            "CMO",
            "Domain Registrars and Investors",
            "Partners",
            "US Independents",
            "USI",
        ]
    );
}

#[test]
fn test_detail_view() {
    let mut dashboard = Dashboard::new();
    dashboard.select_tab(Tab::Fos2026);
    dashboard.open_detail("cart_discount_additional_m365").unwrap();

    let detail = dashboard.detail().unwrap().unwrap();
    assert_eq!(detail.experiment.identifier(), "cart_discount_additional_m365");
    assert_eq!(detail.status, ExperimentStatus::Loss);
    assert_eq!(detail.status_description, "This experiment did not meet its goals");
    assert_eq!(
        detail.link.as_str(),
        "https://hivemind.godaddy.com/experiment/cart_discount_additional_m365"
    );
}

#[test]
fn test_detail_link_uses_configured_host() {
    let config = DashboardConfig {
        experiment_host: "experiments.example.com".to_string(),
        ..DashboardConfig::default()
    };
    let mut dashboard = Dashboard::builder().config(config).build();
    dashboard.open_detail("mwp_heuristics_test").unwrap();

    let detail = dashboard.detail().unwrap().unwrap();
    assert_eq!(detail.link.host_str(), Some("experiments.example.com"));
    assert_eq!(detail.status, ExperimentStatus::Running);
}

#[test]
fn test_view_serializes_for_renderer() {
    let dashboard = Dashboard::new();
    let value = serde_json::to_value(dashboard.view()).unwrap();

    assert_eq!(value["tab"], "my-experiments");
    assert_eq!(value["stats"]["wins"], 3);
    assert_eq!(value["experiments"].as_array().map(Vec::len), Some(8));
    assert_eq!(value["filters"]["status"], "all");
}

#[test]
fn test_custom_catalogs() {
    let catalog = Arc::new(
        ExperimentCatalog::from_json(r#"[{"id": "only", "name": "Only One"}]"#).unwrap(),
    );
    let dashboard = Dashboard::builder()
        .my_experiments(Arc::clone(&catalog))
        .build();

    assert_eq!(dashboard.view().experiments.len(), 1);
    // FOS tab still uses the built-in data
    assert_eq!(dashboard.catalog(Tab::Fos2026), fixtures::fos_experiments().as_ref());
}

// ============================================================================
// Recommendation gate
// ============================================================================

#[test]
fn test_request_recommendation() {
    let dashboard = Dashboard::new();

    assert!(matches!(
        dashboard.request_recommendation("", Area::Serp, Goal::Revenue),
        Err(Error::EmptyDescription)
    ));

    let rec = dashboard
        .request_recommendation("Launch AI domain suggestions", Area::Serp, Goal::Revenue)
        .unwrap();
    assert_eq!(rec.confidence, 85);
}

// ============================================================================
// Refresh
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_refresh_waits_configured_delay() {
    let mut dashboard = Dashboard::new();
    let before = dashboard.state().clone();

    let started = tokio::time::Instant::now();
    dashboard.refresh().await;

    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(1000), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(1002), "{elapsed:?}");
    assert!(!dashboard.is_loading());
    assert_eq!(dashboard.state(), &before);
}

#[tokio::test(start_paused = true)]
async fn test_refresh_custom_delay() {
    let config = DashboardConfig {
        refresh_delay_ms: 250,
        ..DashboardConfig::default()
    };
    let mut dashboard = Dashboard::builder().config(config).build();

    let started = tokio::time::Instant::now();
    dashboard.refresh().await;
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(250), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(252), "{elapsed:?}");
}

#[test]
fn test_loading_flag_transitions() {
    let mut dashboard = Dashboard::new();
    dashboard.begin_refresh();
    assert!(dashboard.is_loading());
    assert!(dashboard.view().loading);

    dashboard.finish_refresh();
    assert!(!dashboard.is_loading());
}
