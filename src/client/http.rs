//! Analytics API HTTP client
//!
//! reqwest-based implementation of [`AnalyticsApi`]. No retries: a failed
//! request is reported once and the caller decides what to keep on screen.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

use super::{AnalyticsApi, FetchError, FetchResult};
use crate::analytics::{MomentumEntry, TopSkillsResponse, TrendPoint};
use crate::query::{endpoint_url, normalize_base_url, top_skills_url, Endpoint, SkillsQuery};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the analytics API (e.g., "https://data-nerd-api.onrender.com")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: crate::query::DEFAULT_API_BASE.to_string(),
            // The free-tier deployment can take a while to wake up
            request_timeout_ms: 30_000,
        }
    }
}

/// Analytics API client over HTTP
#[derive(Debug, Clone)]
pub struct HttpAnalyticsClient {
    client: Client,
    base_url: String,
}

impl HttpAnalyticsClient {
    /// Create a client; fails if the base URL is not absolute
    pub fn new(config: ClientConfig) -> FetchResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| FetchError::Network {
                endpoint: Endpoint::TopSkills,
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `url` and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint, url: &str) -> FetchResult<T> {
        let request_id = uuid::Uuid::new_v4();
        let started = Instant::now();

        tracing::debug!(%request_id, %endpoint, url, "Sending request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                %request_id,
                %endpoint,
                status = status.as_u16(),
                "Analytics API returned an error status"
            );
            return Err(FetchError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode {
                endpoint,
                message: e.to_string(),
            })?;

        tracing::debug!(
            %request_id,
            %endpoint,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Request complete"
        );

        Ok(body)
    }
}

/// Map a transport error onto the fetch taxonomy
fn classify(endpoint: Endpoint, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout { endpoint }
    } else if error.is_decode() {
        FetchError::Decode {
            endpoint,
            message: error.to_string(),
        }
    } else {
        FetchError::Network {
            endpoint,
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl AnalyticsApi for HttpAnalyticsClient {
    async fn top_skills(&self, query: &SkillsQuery) -> FetchResult<TopSkillsResponse> {
        let url = top_skills_url(&self.base_url, query)?;
        self.get_json(Endpoint::TopSkills, &url).await
    }

    async fn skill_trends(&self) -> FetchResult<Vec<TrendPoint>> {
        let url = endpoint_url(&self.base_url, Endpoint::SkillTrends)?;
        self.get_json(Endpoint::SkillTrends, &url).await
    }

    async fn momentum(&self) -> FetchResult<Vec<MomentumEntry>> {
        let url = endpoint_url(&self.base_url, Endpoint::Momentum)?;
        self.get_json(Endpoint::Momentum, &url).await
    }
}
