//! Filter state and top-skills query parameters

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Optional constraints narrowing the top-skills query
///
/// An empty (or whitespace-only) field means "no filter" and is omitted
/// from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub country: String,
}

impl Filter {
    /// Builder method: set the job title
    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = job_title.into();
        self
    }

    /// Builder method: set the country
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Job title to send, `None` when unfiltered
    pub fn job_title(&self) -> Option<&str> {
        non_empty(&self.job_title)
    }

    /// Country to send, `None` when unfiltered
    pub fn country(&self) -> Option<&str> {
        non_empty(&self.country)
    }

    /// True when neither constraint is set
    pub fn is_empty(&self) -> bool {
        self.job_title().is_none() && self.country().is_none()
    }

    /// Whether two filters would produce different requests
    pub fn differs_from(&self, other: &Filter) -> bool {
        self.job_title() != other.job_title() || self.country() != other.country()
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// A selectable filter value with its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Job titles offered in the role selector
pub const JOB_TITLE_OPTIONS: [FilterOption; 3] = [
    FilterOption { value: "", label: "All Roles" },
    FilterOption { value: "Data Analyst", label: "Data Analyst" },
    FilterOption { value: "Data Scientist", label: "Data Scientist" },
];

/// Countries offered in the region selector
pub const COUNTRY_OPTIONS: [FilterOption; 3] = [
    FilterOption { value: "", label: "Global" },
    FilterOption { value: "India", label: "India" },
    FilterOption { value: "United States", label: "USA" },
];

/// Ordering applied by the server to the top-skills result set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// By number of postings; `value` is the share of filtered jobs in percent
    #[default]
    Count,
    /// By average yearly salary; `value` is the salary itself
    Salary,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Count => "count",
            SortBy::Salary => "salary",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "count" => Ok(SortBy::Count),
            "salary" => Ok(SortBy::Salary),
            other => Err(format!("Unknown sort order: {} (expected count or salary)", other)),
        }
    }
}

/// Full parameter set of a top-skills request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsQuery {
    pub filter: Filter,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub skill_type: Option<String>,
}

impl SkillsQuery {
    /// Query the dashboard issues: the filter, sorted by count
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            sort_by: SortBy::Count,
            skill_type: None,
        }
    }

    /// Builder method: set the sort order
    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Builder method: restrict to one skill type (e.g. "programming")
    pub fn skill_type(mut self, skill_type: impl Into<String>) -> Self {
        let skill_type = skill_type.into();
        self.skill_type = non_empty(&skill_type).map(str::to_string);
        self
    }

    /// Query parameters in request order, empty filters omitted
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("sort_by", self.sort_by.as_str().to_string())];

        if let Some(job_title) = self.filter.job_title() {
            pairs.push(("job_title", job_title.to_string()));
        }
        if let Some(country) = self.filter.country() {
            pairs.push(("country", country.to_string()));
        }
        if let Some(skill_type) = self.skill_type.as_deref().and_then(non_empty) {
            pairs.push(("skill_type", skill_type.to_string()));
        }

        pairs
    }
}
