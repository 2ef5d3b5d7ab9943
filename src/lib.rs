//! # Experiment Showcase: dashboard core for A/B experiment portfolios
//!
//! **Version**: 0.1.0
//!
//! The logic behind an experiment showcase dashboard, as isolated and
//! testable Rust. Rendering is left to the caller; this crate produces view
//! models.
//!
//! ## Components
//!
//! - [`experiment`]: the experiment record, its wire format and catalogs
//! - [`query`]: filter/sort engine for the list view
//! - [`stats`]: summary counts for the stat cards
//! - [`recommend`]: rule engine suggesting a design, metrics and duration
//! - [`dashboard`]: the presentation shell state machine
//! - [`comparison`] and [`insights`]: static analysis tables
//!
//! Data flows one way: catalogs feed the pure engines, the shell combines
//! their results into views. Nothing performs network I/O.
//!
//! ## Example Usage
//!
//! ```rust
//! use experiment_showcase::dashboard::Dashboard;
//! use experiment_showcase::query::{FilterCriteria, SortKey};
//! use experiment_showcase::recommend::{Area, Goal};
//!
//! let mut dashboard = Dashboard::new();
//! dashboard.set_filters(FilterCriteria::default().sorted_by(SortKey::Votes));
//!
//! let view = dashboard.view();
//! println!("{}: {} experiments", view.title, view.experiments.len());
//!
//! let rec = dashboard.request_recommendation("Redesign the homepage hero", Area::Homepage, Goal::Engagement)?;
//! println!("{} ({}%)", rec.kind.heading(), rec.confidence);
//! # Ok::<(), experiment_showcase::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod comparison;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod experiment;
pub mod fixtures;
pub mod insights;
pub mod query;
pub mod recommend;
pub mod stats;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm;

pub use error::{Error, Result};
