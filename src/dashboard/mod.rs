//! Presentation shell: the dashboard state machine
//!
//! Owns the UI state and wires the pure engines to view models.
//!
//! ```text
//!                 select_tab(t)                   open_detail(id)
//!   ┌──────────┐ ───────────────► ┌──────────┐ ──────────────────► ┌────────────┐
//!   │ tab = a  │                  │ tab = t  │                     │ open(id)   │
//!   │ filters  │ ◄─────────────── │ defaults │ ◄────────────────── │            │
//!   └──────────┘  set_filters /   └──────────┘    close_detail     └────────────┘
//!                 clear_filters
//! ```
//!
//! ## Example
//!
//! ```rust
//! use experiment_showcase::dashboard::{Dashboard, Tab};
//! use experiment_showcase::query::{FilterCriteria, StatusFilter};
//!
//! let mut dashboard = Dashboard::new();
//! dashboard.select_tab(Tab::Fos2026);
//! dashboard.set_filters(FilterCriteria::default().with_status(StatusFilter::Running));
//!
//! let view = dashboard.view();
//! assert!(view.experiments.iter().all(|e| e.is_running()));
//! assert_eq!(view.stats.total, 14);
//! ```

mod state;
mod view;

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::experiment::ExperimentCatalog;
use crate::fixtures;
use crate::query::{filter_experiments, FilterCriteria};
use crate::recommend::{self, Area, Goal, Recommendation};
use crate::stats::ExperimentStats;
use crate::{Error, Result};

pub use state::{DashboardState, DetailPanel, Tab};
pub use view::{DashboardView, DetailView};

/// The dashboard shell.
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    my_experiments: Arc<ExperimentCatalog>,
    fos_experiments: Arc<ExperimentCatalog>,
    state: DashboardState,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    /// Shell over the built-in datasets with the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new dashboard builder
    #[must_use]
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::default()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Current UI state.
    #[must_use]
    pub const fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Active tab.
    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.state.tab
    }

    /// Current filter bar.
    #[must_use]
    pub const fn filters(&self) -> &FilterCriteria {
        &self.state.filters
    }

    /// Whether a refresh is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.loading
    }

    /// Collection backing `tab`.
    #[must_use]
    pub fn catalog(&self, tab: Tab) -> &ExperimentCatalog {
        match tab {
            Tab::MyExperiments => &self.my_experiments,
            Tab::Fos2026 => &self.fos_experiments,
        }
    }

    /// Collection backing the active tab.
    #[must_use]
    pub fn active_catalog(&self) -> &ExperimentCatalog {
        self.catalog(self.state.tab)
    }

    /// Record counts for the tab-bar badges.
    #[must_use]
    pub fn tab_counts(&self) -> [(Tab, usize); 2] {
        Tab::ALL.map(|tab| (tab, self.catalog(tab).len()))
    }

    /// Switch collections. Filters reset to defaults and the detail overlay closes.
    pub fn select_tab(&mut self, tab: Tab) {
        info!(from = %self.state.tab, to = %tab, "select tab");
        self.state.tab = tab;
        self.state.filters = FilterCriteria::default();
        self.state.detail = DetailPanel::Closed;
    }

    /// Open the detail overlay on `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownExperiment`] if the active tab has no such record;
    /// the state is left unchanged.
    pub fn open_detail(&mut self, identifier: &str) -> Result<()> {
        if self.active_catalog().get(identifier).is_none() {
            return Err(Error::UnknownExperiment(identifier.to_string()));
        }
        info!(tab = %self.state.tab, identifier, "open detail");
        self.state.detail = DetailPanel::Open(identifier.to_string());
        Ok(())
    }

    /// Close the detail overlay. No-op when already closed.
    pub fn close_detail(&mut self) {
        if self.state.detail.is_open() {
            info!("close detail");
        }
        self.state.detail = DetailPanel::Closed;
    }

    /// Replace the filter bar.
    pub fn set_filters(&mut self, filters: FilterCriteria) {
        debug!(?filters, "set filters");
        self.state.filters = filters;
    }

    /// Reset the filter bar to its defaults.
    pub fn clear_filters(&mut self) {
        info!("clear filters");
        self.state.filters = FilterCriteria::default();
    }

    /// Replace the whole UI state, e.g. when restoring a saved session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownExperiment`] if `state` has the detail overlay
    /// open on a record its tab does not contain.
    pub fn restore(&mut self, state: DashboardState) -> Result<()> {
        if let Some(identifier) = state.detail.open_id() {
            if self.catalog(state.tab).get(identifier).is_none() {
                return Err(Error::UnknownExperiment(identifier.to_string()));
            }
        }
        info!(tab = %state.tab, "restore state");
        self.state = state;
        Ok(())
    }

    /// List page for the active tab.
    #[must_use]
    pub fn view(&self) -> DashboardView<'_> {
        let catalog = self.active_catalog();
        DashboardView {
            tab: self.state.tab,
            title: self.state.tab.title(),
            experiments: filter_experiments(catalog.experiments(), &self.state.filters),
            stats: ExperimentStats::from_experiments(catalog),
            business_units: catalog.business_units(),
            filters: &self.state.filters,
            loading: self.state.loading,
        }
    }

    /// Detail overlay, or `None` when closed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLink`] if the configured host does not form a URL.
    pub fn detail(&self) -> Result<Option<DetailView<'_>>> {
        let Some(identifier) = self.state.detail.open_id() else {
            return Ok(None);
        };
        // open_detail and restore only accept ids present in the tab
        let Some(experiment) = self.active_catalog().get(identifier) else {
            return Ok(None);
        };
        let link = self.config.experiment_link(experiment.identifier())?;
        Ok(Some(DetailView::new(experiment, link)))
    }

    /// Recommendation form submit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDescription`] if `description` is blank.
    pub fn request_recommendation(
        &self,
        description: &str,
        area: Area,
        goal: Goal,
    ) -> Result<Recommendation> {
        if description.trim().is_empty() {
            return Err(Error::EmptyDescription);
        }
        Ok(recommend::recommend(description, area, goal))
    }

    /// Mark a refresh as started.
    pub fn begin_refresh(&mut self) {
        debug!("refresh started");
        self.state.loading = true;
    }

    /// Mark a refresh as finished.
    pub fn finish_refresh(&mut self) {
        debug!("refresh finished");
        self.state.loading = false;
    }

    /// Simulated refresh: holds the loading flag for the configured delay.
    ///
    /// Data is static, so nothing is reloaded.
    #[cfg(feature = "tokio")]
    pub async fn refresh(&mut self) {
        self.begin_refresh();
        tokio::time::sleep(self.config.refresh_delay()).await;
        self.finish_refresh();
        info!(delay_ms = self.config.refresh_delay_ms, "refreshed");
    }
}

/// Builder for [`Dashboard`]. Collections not supplied use the built-in datasets.
#[derive(Debug, Default)]
pub struct DashboardBuilder {
    config: DashboardConfig,
    my_experiments: Option<Arc<ExperimentCatalog>>,
    fos_experiments: Option<Arc<ExperimentCatalog>>,
}

impl DashboardBuilder {
    /// Use `config`.
    #[must_use]
    pub fn config(mut self, config: DashboardConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the "My Experiments" collection.
    #[must_use]
    pub fn my_experiments(mut self, catalog: impl Into<Arc<ExperimentCatalog>>) -> Self {
        self.my_experiments = Some(catalog.into());
        self
    }

    /// Replace the "FOS 2026" collection.
    #[must_use]
    pub fn fos_experiments(mut self, catalog: impl Into<Arc<ExperimentCatalog>>) -> Self {
        self.fos_experiments = Some(catalog.into());
        self
    }

    /// Build the dashboard, starting on the configured initial tab.
    #[must_use]
    pub fn build(self) -> Dashboard {
        let state = DashboardState::on_tab(self.config.initial_tab);
        Dashboard {
            my_experiments: self.my_experiments.unwrap_or_else(fixtures::my_experiments),
            fos_experiments: self.fos_experiments.unwrap_or_else(fixtures::fos_experiments),
            config: self.config,
            state,
        }
    }
}
