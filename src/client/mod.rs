//! Analytics API Client
//!
//! - [`FetchError`]: what can go wrong fetching data
//! - [`RequestTracker`]: latest-issued-wins ordering of responses
//! - [`AnalyticsApi`] / `HttpAnalyticsClient`: the API seam and its reqwest
//!   implementation (native builds only; the WASM dashboard uses gloo-net)

mod error;
mod tracker;

#[cfg(feature = "native")]
mod http;

pub use error::{FetchError, FetchResult};
pub use tracker::{FetchSlot, RequestTracker, Ticket};

#[cfg(feature = "native")]
pub use http::{ClientConfig, HttpAnalyticsClient};

#[cfg(feature = "native")]
use crate::analytics::{MomentumEntry, TopSkillsResponse, TrendPoint};
#[cfg(feature = "native")]
use crate::query::SkillsQuery;

/// Source of analytics data
#[cfg(feature = "native")]
#[async_trait::async_trait]
pub trait AnalyticsApi: Send + Sync {
    /// `GET /api/top-skills` with the query's parameters
    async fn top_skills(&self, query: &SkillsQuery) -> FetchResult<TopSkillsResponse>;

    /// `GET /api/skill-trends`
    async fn skill_trends(&self) -> FetchResult<Vec<TrendPoint>>;

    /// `GET /api/momentum`
    async fn momentum(&self) -> FetchResult<Vec<MomentumEntry>>;
}
