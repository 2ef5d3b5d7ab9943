//! Serializable shell state

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::query::FilterCriteria;
use crate::{Error, Result};

/// Which experiment collection is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    /// The signed-in user's experiments.
    #[default]
    #[serde(rename = "my-experiments")]
    MyExperiments,
    /// The 2026 front-of-site portfolio.
    #[serde(rename = "fos-2026")]
    Fos2026,
}

impl Tab {
    /// Both tabs, in tab-bar order.
    pub const ALL: [Self; 2] = [Self::MyExperiments, Self::Fos2026];

    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MyExperiments => "my-experiments",
            Self::Fos2026 => "fos-2026",
        }
    }

    /// Page heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::MyExperiments => "Your Experiments",
            Self::Fos2026 => "FOS Experiments 2026",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "unknown tab '{s}' (expected my-experiments or fos-2026)"
                ))
            })
    }
}

/// The detail overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "id", rename_all = "lowercase")]
pub enum DetailPanel {
    /// No record selected.
    #[default]
    Closed,
    /// Showing the record with this identifier.
    Open(String),
}

impl DetailPanel {
    /// Identifier of the open record.
    #[must_use]
    pub fn open_id(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Open(id) => Some(id),
        }
    }

    /// Whether the overlay is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

/// Complete UI state of the shell.
///
/// Changed only through the transitions on [`super::Dashboard`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardState {
    /// Active tab.
    pub tab: Tab,
    /// Detail overlay.
    pub detail: DetailPanel,
    /// Filter bar.
    pub filters: FilterCriteria,
    /// Set while a refresh is in flight.
    pub loading: bool,
}

impl DashboardState {
    /// Fresh state on `tab`.
    #[must_use]
    pub fn on_tab(tab: Tab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }
}
