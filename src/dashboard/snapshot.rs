//! Dashboard state snapshot

use serde::Serialize;

use crate::analytics::{DashboardSummary, MomentumEntry, SkillResult, TrendPoint};
use crate::client::FetchError;
use crate::query::Filter;
use crate::view::ViewState;

/// Everything the dashboard shows at one moment
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardSnapshot {
    pub filter: Filter,
    pub skills: Vec<SkillResult>,
    pub total_jobs: u64,
    pub trends: Vec<TrendPoint>,
    pub momentum: Vec<MomentumEntry>,
    pub view: ViewState,
    /// Most recent failure; cleared by the next successful load of any kind
    #[serde(skip)]
    pub last_error: Option<FetchError>,
}

impl DashboardSnapshot {
    /// Headline stat cards
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::from_results(&self.skills, self.total_jobs)
    }

    /// True until the first successful skills or trends load
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.trends.is_empty()
    }
}
