// ABOUTME: Endpoint and paging configuration for the Strava client
// ABOUTME: Environment-variable overrides with hardcoded production defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::env;

use strava_core::paging::PagingConfig;

/// Production Strava API base URL.
const DEFAULT_API_BASE: &str = "https://www.strava.com/api/v3";

/// Production deauthorization endpoint (lives outside the API base).
const DEFAULT_DEAUTHORIZE_URL: &str = "https://www.strava.com/oauth/deauthorize";

/// Configuration for the Strava API client.
///
/// Values come from the environment with fallback to production defaults,
/// which also makes the base URL overridable for tests against a local mock
/// server.
#[derive(Debug, Clone)]
pub struct StravaConfig {
    /// Base URL for API calls
    pub api_base: String,
    /// Absolute URL of the token deauthorization endpoint
    pub deauthorize_url: String,
    /// Paging policy applied by the pagination engine
    pub paging: PagingConfig,
}

impl StravaConfig {
    /// Load configuration from `STRAVA_API_BASE` / `STRAVA_DEAUTHORIZE_URL`,
    /// falling back to the production endpoints.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_base: env_or("STRAVA_API_BASE", DEFAULT_API_BASE),
            deauthorize_url: env_or("STRAVA_DEAUTHORIZE_URL", DEFAULT_DEAUTHORIZE_URL),
            paging: PagingConfig::default(),
        }
    }

    /// Configuration pointing at the given API base, for tests and proxies.
    #[must_use]
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::from_env()
        }
    }
}

impl Default for StravaConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_owned())
}
