//! Fetch error types
//!
//! Every failure the dashboard can hit while talking to the analytics API.
//! From the user's point of view they are all "fetch failed"; the variants
//! exist so logs say what actually went wrong.

use thiserror::Error;

use crate::query::Endpoint;

/// Errors that can occur while fetching analytics data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Connection refused, DNS failure, CORS rejection, ...
    #[error("Network error on {endpoint}: {message}")]
    Network { endpoint: Endpoint, message: String },

    /// Server answered with a non-2xx status
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },

    /// Body was not the JSON shape we expect
    #[error("Failed to decode {endpoint} response: {message}")]
    Decode { endpoint: Endpoint, message: String },

    /// Request exceeded the configured timeout
    #[error("Request to {endpoint} timed out")]
    Timeout { endpoint: Endpoint },

    /// A newer request for the same data replaced this one
    #[error("Request to {endpoint} was superseded")]
    Cancelled { endpoint: Endpoint },

    /// API base URL is not an absolute http(s) URL
    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Endpoint the failed request was addressed to, if any
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            FetchError::Network { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Decode { endpoint, .. }
            | FetchError::Timeout { endpoint }
            | FetchError::Cancelled { endpoint } => Some(*endpoint),
            FetchError::InvalidUrl(_) => None,
        }
    }

    /// Superseded requests are expected and never shown to the user
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled { .. })
    }

    /// Short message for the error banner
    pub fn user_message(&self) -> String {
        match self.endpoint() {
            Some(endpoint) => format!(
                "Could not load {}. Showing the last data received.",
                endpoint.description()
            ),
            None => "The analytics API address is not configured correctly.".to_string(),
        }
    }
}

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Status {
            endpoint: Endpoint::TopSkills,
            status: 503,
        };
        assert_eq!(err.to_string(), "/api/top-skills returned HTTP 503");

        let err = FetchError::Timeout {
            endpoint: Endpoint::SkillTrends,
        };
        assert_eq!(err.to_string(), "Request to /api/skill-trends timed out");
    }

    #[test]
    fn test_endpoint_and_cancellation() {
        let err = FetchError::Cancelled {
            endpoint: Endpoint::TopSkills,
        };
        assert!(err.is_cancelled());
        assert_eq!(err.endpoint(), Some(Endpoint::TopSkills));

        let err = FetchError::InvalidUrl("ftp://nope".to_string());
        assert!(!err.is_cancelled());
        assert_eq!(err.endpoint(), None);
    }

    #[test]
    fn test_user_message_names_the_data() {
        let err = FetchError::Network {
            endpoint: Endpoint::SkillTrends,
            message: "connection refused".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Could not load skill trends. Showing the last data received."
        );
    }
}
