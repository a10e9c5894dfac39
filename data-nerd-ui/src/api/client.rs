//! HTTP API Client
//!
//! Functions for reading from the Data Nerd analytics API.

use data_nerd::analytics::{MomentumEntry, TopSkillsResponse, TrendPoint};
use data_nerd::client::{FetchError, FetchResult};
use data_nerd::query::{
    endpoint_url, normalize_base_url, top_skills_url, Endpoint, SkillsQuery, DEFAULT_API_BASE,
};
use data_nerd::view::{DashboardOptions, FetchStrategy};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use web_sys::AbortSignal;

/// Local storage key for a custom API base URL
pub const API_URL_STORAGE_KEY: &str = "data_nerd_api_url";

/// Local storage key for the fetch strategy
pub const STRATEGY_STORAGE_KEY: &str = "data_nerd_fetch_strategy";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn stored_item(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

fn store_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    resolve_api_base(stored_item(API_URL_STORAGE_KEY).as_deref())
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) -> FetchResult<()> {
    let url = normalize_base_url(url)?;
    store_item(API_URL_STORAGE_KEY, &url);
    Ok(())
}

/// Dashboard variant chosen on the About page, combined by default
pub fn get_dashboard_options() -> DashboardOptions {
    resolve_dashboard_options(stored_item(STRATEGY_STORAGE_KEY).as_deref())
}

/// Remember the fetch strategy; it applies the next time the app mounts
pub fn set_fetch_strategy(strategy: FetchStrategy) {
    store_item(STRATEGY_STORAGE_KEY, strategy.as_str());
}

/// Options for a stored strategy name; unknown values fall back to the default
pub fn resolve_dashboard_options(stored: Option<&str>) -> DashboardOptions {
    match stored.and_then(|value| value.parse::<FetchStrategy>().ok()) {
        Some(FetchStrategy::Independent) => DashboardOptions::independent(),
        Some(FetchStrategy::Combined) | None => DashboardOptions::combined(),
    }
}

/// Stored URL if it is usable, otherwise the hosted API
pub fn resolve_api_base(stored: Option<&str>) -> String {
    stored
        .and_then(|url| normalize_base_url(url).ok())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

// ============ API Functions ============

/// Fetch the top skills for a query
pub async fn fetch_top_skills(
    query: &SkillsQuery,
    signal: Option<&AbortSignal>,
) -> FetchResult<TopSkillsResponse> {
    let url = top_skills_url(&get_api_base(), query)?;
    get_json(Endpoint::TopSkills, &url, signal).await
}

/// Fetch monthly demand for the charted skills
pub async fn fetch_skill_trends(signal: Option<&AbortSignal>) -> FetchResult<Vec<TrendPoint>> {
    let url = endpoint_url(&get_api_base(), Endpoint::SkillTrends)?;
    get_json(Endpoint::SkillTrends, &url, signal).await
}

/// Fetch month-over-month gainers and losers
pub async fn fetch_momentum(signal: Option<&AbortSignal>) -> FetchResult<Vec<MomentumEntry>> {
    let url = endpoint_url(&get_api_base(), Endpoint::Momentum)?;
    get_json(Endpoint::Momentum, &url, signal).await
}

async fn get_json<T: DeserializeOwned>(
    endpoint: Endpoint,
    url: &str,
    signal: Option<&AbortSignal>,
) -> FetchResult<T> {
    let response = Request::get(url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| classify(endpoint, e, signal))?;

    if !response.ok() {
        return Err(FetchError::Status {
            endpoint,
            status: response.status(),
        });
    }

    response.json::<T>().await.map_err(|e| {
        if is_aborted(signal) {
            FetchError::Cancelled { endpoint }
        } else {
            FetchError::Decode {
                endpoint,
                message: e.to_string(),
            }
        }
    })
}

fn classify(endpoint: Endpoint, error: gloo_net::Error, signal: Option<&AbortSignal>) -> FetchError {
    if is_aborted(signal) {
        FetchError::Cancelled { endpoint }
    } else {
        FetchError::Network {
            endpoint,
            message: error.to_string(),
        }
    }
}

fn is_aborted(signal: Option<&AbortSignal>) -> bool {
    signal.map(AbortSignal::aborted).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_base() {
        assert_eq!(resolve_api_base(None), "https://data-nerd-api.onrender.com");
        assert_eq!(
            resolve_api_base(Some("http://localhost:8000/")),
            "http://localhost:8000"
        );
        // Garbage in storage falls back to the hosted API
        assert_eq!(
            resolve_api_base(Some("not a url")),
            "https://data-nerd-api.onrender.com"
        );
    }

    #[test]
    fn test_resolve_dashboard_options() {
        assert_eq!(resolve_dashboard_options(None), DashboardOptions::combined());
        assert_eq!(
            resolve_dashboard_options(Some("independent")),
            DashboardOptions::independent()
        );
        assert_eq!(
            resolve_dashboard_options(Some(" Combined ")),
            DashboardOptions::combined()
        );
        assert_eq!(
            resolve_dashboard_options(Some("parallel")),
            DashboardOptions::combined()
        );
    }
}
