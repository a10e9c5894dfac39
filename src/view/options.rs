//! Dashboard variants
//!
//! Two versions of the dashboard shipped historically: one loaded skills and
//! trends together behind a spinner, the other fetched them independently
//! with no spinner. Both are kept as configuration of one component.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::state::ViewState;

/// How skills and trends are loaded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStrategy {
    /// One paired request; neither half applies unless both succeed
    #[default]
    Combined,
    /// Separate requests that apply on their own
    Independent,
}

impl FetchStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            FetchStrategy::Combined => "combined",
            FetchStrategy::Independent => "independent",
        }
    }
}

impl fmt::Display for FetchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FetchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "combined" => Ok(FetchStrategy::Combined),
            "independent" => Ok(FetchStrategy::Independent),
            other => Err(format!(
                "Unknown fetch strategy: {} (expected combined or independent)",
                other
            )),
        }
    }
}

/// Behaviour flags of the dashboard component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardOptions {
    #[serde(default)]
    pub fetch_strategy: FetchStrategy,
    #[serde(default = "default_show_loading_spinner")]
    pub show_loading_spinner: bool,
}

fn default_show_loading_spinner() -> bool {
    true
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self::combined()
    }
}

impl DashboardOptions {
    /// Paired load behind a full-page spinner
    pub fn combined() -> Self {
        Self {
            fetch_strategy: FetchStrategy::Combined,
            show_loading_spinner: true,
        }
    }

    /// Independent loads, content always visible
    pub fn independent() -> Self {
        Self {
            fetch_strategy: FetchStrategy::Independent,
            show_loading_spinner: false,
        }
    }

    /// Whether the spinner replaces the content right now
    pub fn spinner_visible(&self, view: &ViewState) -> bool {
        self.show_loading_spinner && view.is_loading
    }
}
