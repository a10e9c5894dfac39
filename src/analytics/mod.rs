//! Analytics Data
//!
//! The rows the analytics API serves and the metrics derived from them.

mod metrics;
mod types;

pub use metrics::{
    format_change_percent, format_count, format_salary_k, peak_salary, split_momentum, top_skill,
    top_skill_label, DashboardSummary, NO_TOP_SKILL,
};
pub use types::{MomentumEntry, SkillResult, TopSkillsResponse, TrendPoint, TrendSkill};
