//! View state and its transitions
//!
//! Ephemeral UI state owned by the dashboard. It is only changed through the
//! methods below, none of which touch analytics data or issue requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::layout::is_mobile_width;

/// The four dashboard sections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Dashboard,
    Skills,
    Trends,
    About,
}

impl Tab {
    /// All tabs, in sidebar order
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Skills, Tab::Trends, Tab::About];

    pub fn key(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Skills => "skills",
            Tab::Trends => "trends",
            Tab::About => "about",
        }
    }

    /// Sidebar label
    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Skills => "Top Skills",
            Tab::Trends => "Market Trends",
            Tab::About => "About Project",
        }
    }

    /// Sidebar icon
    pub fn icon(self) -> &'static str {
        match self {
            Tab::Dashboard => "📊",
            Tab::Skills => "🔥",
            Tab::Trends => "📈",
            Tab::About => "ℹ️",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.key() == s.trim().to_lowercase())
            .ok_or_else(|| format!("Unknown tab: {}", s))
    }
}

/// UI state of a mounted dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub active_tab: Tab,
    pub mobile_menu_open: bool,
    pub is_mobile: bool,
    pub is_loading: bool,
}

impl ViewState {
    /// Initial state for a viewport of the given width
    pub fn for_viewport(width: f64) -> Self {
        Self {
            is_mobile: is_mobile_width(width),
            ..Default::default()
        }
    }

    /// Switch section; always closes the mobile menu
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.mobile_menu_open = false;
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.mobile_menu_open = open;
    }

    /// Hamburger button
    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Overlay click
    pub fn close_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Viewport resized; returns true when the mobile/desktop mode flipped
    pub fn resize(&mut self, width: f64) -> bool {
        let is_mobile = is_mobile_width(width);
        let changed = is_mobile != self.is_mobile;
        self.is_mobile = is_mobile;
        changed
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// The page body must not scroll behind an open menu overlay
    pub fn body_scroll_locked(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ViewState::default();
        assert_eq!(state.active_tab, Tab::Dashboard);
        assert!(!state.mobile_menu_open);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_select_tab_closes_menu() {
        let mut state = ViewState::for_viewport(375.0);
        state.toggle_menu();
        assert!(state.mobile_menu_open);
        assert!(state.body_scroll_locked());

        state.select_tab(Tab::Trends);
        assert_eq!(state.active_tab, Tab::Trends);
        assert!(!state.mobile_menu_open);
        assert!(!state.body_scroll_locked());
    }

    #[test]
    fn test_select_tab_with_menu_closed() {
        let mut state = ViewState::default();
        for tab in Tab::ALL {
            state.select_tab(tab);
            assert!(state.is_active(tab));
            assert!(!state.mobile_menu_open);
        }
    }

    #[test]
    fn test_menu_transitions() {
        let mut state = ViewState::default();
        state.toggle_menu();
        state.toggle_menu();
        assert!(!state.mobile_menu_open);

        state.set_menu_open(true);
        state.close_menu();
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_resize_reports_mode_changes() {
        let mut state = ViewState::for_viewport(1280.0);
        assert!(!state.is_mobile);

        assert!(!state.resize(1024.0));
        assert!(state.resize(767.0));
        assert!(state.is_mobile);
        assert!(!state.resize(500.0));
        assert!(state.resize(768.0));
        assert!(!state.is_mobile);
    }

    #[test]
    fn test_tab_parsing() {
        assert_eq!("skills".parse::<Tab>().unwrap(), Tab::Skills);
        assert_eq!("About".parse::<Tab>().unwrap(), Tab::About);
        assert!("settings".parse::<Tab>().is_err());
        assert_eq!(Tab::Trends.to_string(), "trends");
    }
}
