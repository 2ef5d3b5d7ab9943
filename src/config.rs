//! Dashboard configuration
//!
//! All fields have defaults, so an empty JSON object is a valid config:
//!
//! ```rust
//! use experiment_showcase::config::DashboardConfig;
//! use experiment_showcase::dashboard::Tab;
//!
//! let config = DashboardConfig::from_json(r#"{ "refreshDelayMs": 250 }"#)?;
//! assert_eq!(config.refresh_delay_ms, 250);
//! assert_eq!(config.experiment_host, "hivemind.godaddy.com");
//! assert_eq!(config.initial_tab, Tab::MyExperiments);
//! # Ok::<(), experiment_showcase::Error>(())
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::{ParseError, Url};

use crate::dashboard::Tab;
use crate::{Error, Result};

/// Default host of the experiment platform.
pub const DEFAULT_EXPERIMENT_HOST: &str = "hivemind.godaddy.com";

/// Default simulated refresh latency.
pub const DEFAULT_REFRESH_DELAY_MS: u64 = 1000;

/// Settings of the presentation shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    /// Host that outbound experiment links point at.
    pub experiment_host: String,
    /// How long `refresh` keeps the loading flag set.
    pub refresh_delay_ms: u64,
    /// Tab shown on startup.
    pub initial_tab: Tab,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            experiment_host: DEFAULT_EXPERIMENT_HOST.to_string(),
            refresh_delay_ms: DEFAULT_REFRESH_DELAY_MS,
            initial_tab: Tab::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid config object.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        debug!(
            host = %config.experiment_host,
            refresh_delay_ms = config.refresh_delay_ms,
            "parsed dashboard config"
        );
        Ok(config)
    }

    /// Read and parse a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Refresh delay as a [`Duration`].
    #[must_use]
    pub const fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    /// Outbound link for an experiment: `https://<host>/experiment/<identifier>`.
    ///
    /// The identifier is percent-encoded as a single path segment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidLink`] if the host does not form a URL.
    pub fn experiment_link(&self, identifier: &str) -> Result<Url> {
        let base = Url::parse(&format!("https://{}/", self.experiment_host))?;
        experiment_path(base, identifier)
    }
}

/// Append `experiment/<identifier>` to the path of `link`.
fn experiment_path(mut link: Url, identifier: &str) -> Result<Url> {
    link.path_segments_mut()
        .map_err(|()| Error::InvalidLink(ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend(["experiment", identifier]);
    Ok(link)
}
