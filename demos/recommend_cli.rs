//! Recommend CLI: the rule engine from the command line
//!
//! Run with: cargo run --example recommend_cli -- "<description>" [area] [goal]
//! Example:  cargo run --example recommend_cli -- "Launch AI domain suggestions" serp revenue

use anyhow::{bail, Result};
use experiment_showcase::dashboard::Dashboard;
use experiment_showcase::insights::{metric_insight, TypeGuidance};
use experiment_showcase::recommend::{Area, Goal};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(description) = args.next() else {
        bail!("usage: recommend_cli <description> [area] [goal]");
    };
    let area: Area = args.next().as_deref().unwrap_or("serp").parse()?;
    let goal: Goal = args.next().as_deref().unwrap_or("conversion").parse()?;

    let dashboard = Dashboard::new();
    let rec = dashboard.request_recommendation(&description, area, goal)?;

    println!("=== Recommended: {} ({}% confidence) ===\n", rec.kind.heading(), rec.confidence);
    println!("  {}\n", rec.reason);
    println!("  Scorecard: {}", rec.suggested_scorecard);
    println!("  Duration:  {}", rec.estimated_duration);
    println!("  Metrics:");
    for metric in &rec.suggested_metrics {
        match metric_insight(metric.name) {
            Some(insight) => println!(
                "    - {metric}  [{}% win rate, {} experiments]",
                insight.win_rate, insight.usage
            ),
            None => println!("    - {metric}"),
        }
    }

    if let Some(guidance) = TypeGuidance::for_kind(&rec.kind) {
        println!("\n  Best for:");
        for item in guidance.best_for {
            println!("    - {item}");
        }
        println!("  Considerations:");
        for item in guidance.considerations {
            println!("    - {item}");
        }
    }

    Ok(())
}
