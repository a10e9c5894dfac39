//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod filter_bar;
pub mod loading;
pub mod nav;
pub mod stat_card;
pub mod toast;

pub use chart::{BarChart, TrendChart};
pub use filter_bar::FilterBar;
pub use loading::Loading;
pub use nav::{Navbar, Sidebar, SidebarOverlay};
pub use stat_card::StatRow;
pub use toast::ErrorBanner;
