//! Shared helpers for service-level tests.
//!
//! Each test gets an isolated registry and a client pointed at its own mock
//! server, so cached service instances never leak between tests.

#![allow(dead_code)]

use std::sync::Arc;

use strava_client::registry::ServiceRegistry;
use strava_client::{AccessToken, PagingConfig, Strava, StravaConfig};
use wiremock::MockServer;

/// Build an isolated client pointed at the mock server.
pub fn client_for(server: &MockServer, token: &str, write_access: bool) -> Strava {
    client_with_paging(server, token, write_access, PagingConfig::default())
}

/// Build an isolated client with an explicit paging policy.
pub fn client_with_paging(
    server: &MockServer,
    token: &str,
    write_access: bool,
    paging: PagingConfig,
) -> Strava {
    let config = StravaConfig {
        api_base: server.uri(),
        deauthorize_url: format!("{}/oauth/deauthorize", server.uri()),
        paging,
    };
    Strava::with_registry(
        AccessToken::new(token, write_access),
        config,
        Arc::new(ServiceRegistry::new()),
    )
}

/// Paging policy small enough to drive multi-page fetches from a mock.
pub fn tiny_pages() -> PagingConfig {
    PagingConfig {
        default_page_size: 2,
        max_page_size: 2,
        ignore_limit_on_explicit_request: true,
    }
}
