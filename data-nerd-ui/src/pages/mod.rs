//! Pages
//!
//! Top-level page components, one per tab.

pub mod about;
pub mod dashboard;
pub mod skills;
pub mod trends;

pub use about::About;
pub use dashboard::Dashboard;
pub use skills::Skills;
pub use trends::Trends;
