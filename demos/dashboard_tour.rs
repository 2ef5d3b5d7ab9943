//! Dashboard Tour: driving the presentation shell end to end
//!
//! Walks both tabs, filters and sorts, opens a detail overlay and runs a
//! simulated refresh.
//!
//! Run with: cargo run --example dashboard_tour
//! Verbose:  RUST_LOG=experiment_showcase=debug cargo run --example dashboard_tour

use anyhow::Result;
use experiment_showcase::dashboard::{Dashboard, Tab};
use experiment_showcase::query::{FilterCriteria, SortKey, StatusFilter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Experiment Showcase: Dashboard Tour ===\n");

    let mut dashboard = Dashboard::new();
    for (tab, count) in dashboard.tab_counts() {
        println!("  {:<22} {count} experiments", tab.title());
    }

    println!("\n=== {} ===", dashboard.tab().title());
    let view = dashboard.view();
    for card in view.stats.cards() {
        println!("  {:<18} {}", card.label, card.value);
    }

    println!("\n=== Wins, most voted first ===");
    dashboard.set_filters(
        FilterCriteria::default()
            .with_status(StatusFilter::Win)
            .sorted_by(SortKey::Votes),
    );
    for experiment in dashboard.view().experiments {
        println!("  {:>3} votes  {}", experiment.votes(), experiment.display_name());
    }

    println!("\n=== FOS 2026: running SERP experiments ===");
    dashboard.select_tab(Tab::Fos2026);
    dashboard.set_filters(
        FilterCriteria::default()
            .with_search("serp")
            .with_status(StatusFilter::Running),
    );
    let view = dashboard.view();
    if view.is_empty() {
        println!("  No experiments found");
    }
    for experiment in &view.experiments {
        println!("  [{}] {}", experiment.business_unit(), experiment.display_name());
    }
    println!("  Business units: {}", view.business_units.join(", "));

    let first = view.experiments.first().map(|e| e.identifier().to_string());
    if let Some(identifier) = first {
        dashboard.open_detail(&identifier)?;
        if let Some(detail) = dashboard.detail()? {
            println!("\n=== Detail: {} ===", detail.experiment.display_name());
            println!("  Status: {} ({})", detail.status_label, detail.status_description);
            println!("  Change: {}", detail.experiment.hypothesis_change());
            println!("  Decision metrics: {}", detail.experiment.decision_metrics().join(", "));
            println!("  Link: {}", detail.link);
        }
        dashboard.close_detail();
    }

    println!("\n=== Refresh ===");
    dashboard.refresh().await;
    println!("  Loading: {}", dashboard.is_loading());

    Ok(())
}
