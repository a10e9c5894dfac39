//! # Data Nerd
//!
//! Job-market analytics for data roles: which skills are in demand, what
//! they pay, and how demand moves over time. The data comes from a remote
//! analytics API; this crate is the client side of it.
//!
//! ## Modules
//!
//! - [`analytics`]: API row types and derived metrics (top skill, peak salary)
//! - [`query`]: filters, query parameters and endpoint URLs
//! - [`view`]: tabs, mobile menu, loading flag and chart layout
//! - [`client`]: fetch errors, request ordering and the HTTP client
//! - `dashboard`: the native dashboard controller (feature `native`)
//! - `config`, `logging`, `report`: the CLI's ambient pieces (feature `native`)
//!
//! The browser dashboard lives in the `data-nerd-ui` crate and depends on
//! this crate with default features off.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use data_nerd::client::{ClientConfig, HttpAnalyticsClient};
//! use data_nerd::dashboard::DashboardController;
//! use data_nerd::view::DashboardOptions;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(HttpAnalyticsClient::new(ClientConfig::default())?);
//!     let dashboard = DashboardController::new(client, DashboardOptions::default());
//!
//!     dashboard.load().await;
//!     dashboard.set_job_title("Data Analyst").await;
//!     dashboard.settle().await;
//!
//!     let snapshot = dashboard.snapshot().await;
//!     println!("Top skill: {}", snapshot.summary().top_skill);
//!
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod client;
pub mod query;
pub mod view;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod dashboard;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod report;

// Re-export top-level types for convenience
pub use analytics::{
    DashboardSummary, MomentumEntry, SkillResult, TopSkillsResponse, TrendPoint, TrendSkill,
};

pub use query::{Endpoint, Filter, SkillsQuery, SortBy, DEFAULT_API_BASE};

pub use view::{DashboardOptions, FetchStrategy, Tab, ViewState};

pub use client::{FetchError, FetchResult, FetchSlot, RequestTracker, Ticket};

#[cfg(feature = "native")]
pub use client::{AnalyticsApi, ClientConfig, HttpAnalyticsClient};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};

#[cfg(feature = "native")]
pub use dashboard::{DashboardController, DashboardSnapshot};
