//! Core data types returned by the analytics API
//!
//! - `SkillResult`: one in-demand skill with its demand value and salary
//! - `TopSkillsResponse`: envelope of the top-skills endpoint
//! - `TrendPoint`: one month of demand for the charted skills
//! - `TrendSkill`: the fixed set of skills drawn on the trend chart
//! - `MomentumEntry`: month-over-month change for one skill

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the top-skills result set
///
/// Rows are kept in the order the server returned them; the server sorts
/// by demand (or salary), so the first row is the top skill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillResult {
    pub skill_name: String,
    /// Share of filtered jobs in percent (count sort) or average salary (salary sort)
    #[serde(default)]
    pub value: f64,
    /// Average yearly salary; absent or null when no posting listed one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_salary: Option<f64>,
    /// Raw number of postings mentioning the skill
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_count: Option<u64>,
}

impl SkillResult {
    /// Create a row with no salary or count information
    pub fn new(skill_name: impl Into<String>, value: f64) -> Self {
        Self {
            skill_name: skill_name.into(),
            value,
            avg_salary: None,
            job_count: None,
        }
    }

    /// Builder method: set the average salary
    pub fn salary(mut self, avg_salary: f64) -> Self {
        self.avg_salary = Some(avg_salary);
        self
    }

    /// Builder method: set the posting count
    pub fn job_count(mut self, job_count: u64) -> Self {
        self.job_count = Some(job_count);
        self
    }
}

/// Response body of `GET /api/top-skills`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TopSkillsResponse {
    #[serde(default)]
    pub results: Vec<SkillResult>,
    /// Distinct jobs matching the filter (not narrowed by skill type)
    #[serde(default)]
    pub total_jobs: u64,
}

/// Skills plotted on the trend charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendSkill {
    Python,
    Sql,
    Aws,
}

impl TrendSkill {
    /// All series, in legend order
    pub const ALL: [TrendSkill; 3] = [TrendSkill::Python, TrendSkill::Sql, TrendSkill::Aws];

    /// JSON key of the series in a trend row
    pub fn key(self) -> &'static str {
        match self {
            TrendSkill::Python => "python",
            TrendSkill::Sql => "sql",
            TrendSkill::Aws => "aws",
        }
    }

    /// Line colour of the series
    pub fn color(self) -> &'static str {
        match self {
            TrendSkill::Python => "#00d25b",
            TrendSkill::Sql => "#0090e7",
            TrendSkill::Aws => "#fc424a",
        }
    }
}

/// One month of demand for the charted skills
///
/// The server only includes a skill key for months where it had postings;
/// missing keys decode as zero. Any other skill keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    /// Period in `YYYY-MM` form
    pub month: String,
    #[serde(default)]
    pub python: f64,
    #[serde(default)]
    pub sql: f64,
    #[serde(default)]
    pub aws: f64,
}

impl TrendPoint {
    /// Create a point for a month with explicit series values
    pub fn new(month: impl Into<String>, python: f64, sql: f64, aws: f64) -> Self {
        Self {
            month: month.into(),
            python,
            sql,
            aws,
        }
    }

    /// Value of one series at this point
    pub fn value(&self, skill: TrendSkill) -> f64 {
        match skill {
            TrendSkill::Python => self.python,
            TrendSkill::Sql => self.sql,
            TrendSkill::Aws => self.aws,
        }
    }

    /// Largest value across all series
    pub fn max_value(&self) -> f64 {
        TrendSkill::ALL
            .iter()
            .map(|skill| self.value(*skill))
            .fold(0.0, f64::max)
    }

    /// Axis label, e.g. `Jan 2023`; unparseable months are shown verbatim
    pub fn month_label(&self) -> String {
        NaiveDate::parse_from_str(&format!("{}-01", self.month.trim()), "%Y-%m-%d")
            .map(|date| date.format("%b %Y").to_string())
            .unwrap_or_else(|_| self.month.clone())
    }
}

/// Month-over-month demand change for one skill
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MomentumEntry {
    pub skill_name: String,
    #[serde(default)]
    pub current_count: u64,
    #[serde(default)]
    pub previous_count: u64,
    /// Change relative to the previous month, in percent
    #[serde(default)]
    pub change_percent: f64,
}
