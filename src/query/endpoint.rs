//! Analytics API endpoints and URL building

use std::fmt;

use serde::{Deserialize, Serialize};

use super::filter::SkillsQuery;
use crate::client::{FetchError, FetchResult};

/// Default analytics API deployment
pub const DEFAULT_API_BASE: &str = "https://data-nerd-api.onrender.com";

/// Endpoints exposed by the analytics API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// `GET /api/top-skills` - skill demand and salary, optionally filtered
    TopSkills,
    /// `GET /api/skill-trends` - monthly demand for the charted skills
    SkillTrends,
    /// `GET /api/momentum` - month-over-month gainers and losers
    Momentum,
}

impl Endpoint {
    /// Path relative to the API base
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::TopSkills => "/api/top-skills",
            Endpoint::SkillTrends => "/api/skill-trends",
            Endpoint::Momentum => "/api/momentum",
        }
    }

    /// What the endpoint serves, for user-facing messages
    pub fn description(self) -> &'static str {
        match self {
            Endpoint::TopSkills => "top skills",
            Endpoint::SkillTrends => "skill trends",
            Endpoint::Momentum => "market momentum",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Validate an API base URL and strip trailing slashes
pub fn normalize_base_url(base: &str) -> FetchResult<String> {
    let trimmed = base.trim().trim_end_matches('/');

    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    let has_host = trimmed
        .split_once("://")
        .map(|(_, rest)| !rest.is_empty())
        .unwrap_or(false);

    if has_scheme && has_host {
        Ok(trimmed.to_string())
    } else {
        Err(FetchError::InvalidUrl(base.to_string()))
    }
}

/// URL of an endpoint that takes no parameters
pub fn endpoint_url(base: &str, endpoint: Endpoint) -> FetchResult<String> {
    Ok(format!("{}{}", normalize_base_url(base)?, endpoint.path()))
}

/// URL of the top-skills endpoint for the given query
///
/// `sort_by` is always sent first; empty filters are omitted entirely.
pub fn top_skills_url(base: &str, query: &SkillsQuery) -> FetchResult<String> {
    let base = normalize_base_url(base)?;

    let params = query
        .query_pairs()
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
        .collect::<Vec<_>>()
        .join("&");

    Ok(format!("{}{}?{}", base, Endpoint::TopSkills.path(), params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{Filter, SortBy};

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://api.example.com/").unwrap(),
            "https://api.example.com"
        );
        assert_eq!(
            normalize_base_url("  http://localhost:8000//  ").unwrap(),
            "http://localhost:8000"
        );
        assert!(normalize_base_url("api.example.com").is_err());
        assert!(normalize_base_url("https://").is_err());
        assert!(normalize_base_url("").is_err());
    }

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url(DEFAULT_API_BASE, Endpoint::SkillTrends).unwrap(),
            "https://data-nerd-api.onrender.com/api/skill-trends"
        );
        assert_eq!(
            endpoint_url("http://localhost:8000/", Endpoint::Momentum).unwrap(),
            "http://localhost:8000/api/momentum"
        );
    }

    #[test]
    fn test_top_skills_url_without_filters() {
        let url = top_skills_url("http://localhost:8000", &SkillsQuery::default()).unwrap();
        assert_eq!(url, "http://localhost:8000/api/top-skills?sort_by=count");
    }

    #[test]
    fn test_top_skills_url_encodes_filters() {
        let query = SkillsQuery::new(
            Filter::default()
                .with_job_title("Data Scientist")
                .with_country("United States"),
        );
        let url = top_skills_url("http://localhost:8000", &query).unwrap();
        assert_eq!(
            url,
            "http://localhost:8000/api/top-skills?sort_by=count&job_title=Data%20Scientist&country=United%20States"
        );
    }

    #[test]
    fn test_top_skills_url_only_country() {
        let query = SkillsQuery::new(Filter::default().with_country("India"))
            .sort_by(SortBy::Salary)
            .skill_type("programming");
        let url = top_skills_url("http://localhost:8000", &query).unwrap();
        assert_eq!(
            url,
            "http://localhost:8000/api/top-skills?sort_by=salary&country=India&skill_type=programming"
        );
        assert!(!url.contains("job_title"));
    }
}
