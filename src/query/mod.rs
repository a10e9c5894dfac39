//! Query Building
//!
//! Turns dashboard filter state into analytics API requests.
//!
//! - [`Filter`]: job title / country constraints, empty means unfiltered
//! - [`SkillsQuery`]: filter plus sort order and skill type
//! - [`Endpoint`]: the API paths and URL construction

mod endpoint;
mod filter;

pub use endpoint::{endpoint_url, normalize_base_url, top_skills_url, Endpoint, DEFAULT_API_BASE};
pub use filter::{Filter, FilterOption, SkillsQuery, SortBy, COUNTRY_OPTIONS, JOB_TITLE_OPTIONS};
