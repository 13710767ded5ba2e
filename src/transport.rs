// ABOUTME: HTTP transport over a shared reqwest client with connection pooling
// ABOUTME: Maps Strava failure status codes onto the client error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::{Client, ClientBuilder, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use strava_core::errors::{Error, Result};
use strava_core::models::AccessToken;

use crate::config::StravaConfig;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Initialize the shared HTTP client timeout configuration.
///
/// Call once at startup before the first transport is built. If not called,
/// reasonable defaults are used (30s timeout, 10s connect timeout).
pub fn initialize_shared_client(timeout_secs: u64, connect_timeout_secs: u64) {
    let _ = CLIENT_TIMEOUTS.set((timeout_secs, connect_timeout_secs));
}

/// Get the shared HTTP client used for all Strava API calls.
///
/// The client pools connections; cloning it is cheap and shares the pool.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS
            .get()
            .copied()
            .unwrap_or((DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS));

        ClientBuilder::new()
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(connect_timeout))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Authenticated transport bound to one access token.
///
/// Raises exactly four failure kinds: `NotFound` (404), `Unauthorized`
/// (401/403), `BadRequest` (400), and `UnknownApi` for everything else,
/// including network failures and undecodable bodies. The service layer never
/// sees a raw `reqwest` error.
pub struct Transport {
    http: Client,
    config: StravaConfig,
    token: AccessToken,
}

impl Transport {
    /// Build a transport over the shared HTTP client.
    #[must_use]
    pub fn new(config: StravaConfig, token: AccessToken) -> Self {
        Self {
            http: shared_client().clone(),
            config,
            token,
        }
    }

    /// The credential this transport authenticates with.
    #[must_use]
    pub const fn token(&self) -> &AccessToken {
        &self.token
    }

    /// The endpoint configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &StravaConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_base)
    }

    /// GET an endpoint and decode the JSON response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T> {
        let request = self
            .http
            .get(self.url(path))
            .bearer_auth(self.token.secret())
            .query(query);
        self.execute(request, path).await
    }

    /// POST an endpoint with an optional JSON body and decode the response.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<T> {
        let mut request = self
            .http
            .post(self.url(path))
            .bearer_auth(self.token.secret())
            .query(query);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request, path).await
    }

    /// POST an endpoint where the response body carries nothing of interest.
    pub async fn post_no_content(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<()> {
        let request = self
            .http
            .post(self.url(path))
            .bearer_auth(self.token.secret())
            .query(query);
        self.dispatch(request, path).await.map(|_| ())
    }

    /// PUT a JSON body to an endpoint and decode the response.
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self
            .http
            .put(self.url(path))
            .bearer_auth(self.token.secret())
            .json(body);
        self.execute(request, path).await
    }

    /// DELETE an endpoint and decode the echoed entity.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self
            .http
            .delete(self.url(path))
            .bearer_auth(self.token.secret());
        self.execute(request, path).await
    }

    /// DELETE an endpoint that answers with an empty body.
    pub async fn delete_no_content(&self, path: &str) -> Result<()> {
        let request = self
            .http
            .delete(self.url(path))
            .bearer_auth(self.token.secret());
        self.dispatch(request, path).await.map(|_| ())
    }

    /// POST a form to an absolute URL outside the API base (deauthorization).
    pub async fn post_form_absolute<T: DeserializeOwned>(
        &self,
        url: &str,
        form: &[(&'static str, String)],
    ) -> Result<T> {
        let request = self
            .http
            .post(url)
            .bearer_auth(self.token.secret())
            .form(form);
        self.execute(request, url).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder, path: &str) -> Result<T> {
        let body = self.dispatch(request, path).await?;
        serde_json::from_str(&body).map_err(|source| Error::UnknownApi {
            status: None,
            message: format!("failed to decode response from {path}: {source}"),
        })
    }

    async fn dispatch(&self, request: RequestBuilder, path: &str) -> Result<String> {
        debug!(path, "issuing Strava API request");

        let response = request.send().await.map_err(|source| Error::UnknownApi {
            status: None,
            message: format!("request to {path} failed: {source}"),
        })?;

        let status = response.status();
        debug!(path, status = %status, "Strava API response");

        let body = response
            .text()
            .await
            .map_err(|source| Error::UnknownApi {
                status: Some(status.as_u16()),
                message: format!("failed to read response body from {path}: {source}"),
            })?;

        if status.is_success() {
            return Ok(body);
        }

        warn!(path, status = %status, "Strava API returned an error");
        Err(map_status(status, path, body))
    }
}

fn map_status(status: StatusCode, path: &str, body: String) -> Error {
    let payload = (!body.is_empty()).then_some(body);
    match status {
        StatusCode::NOT_FOUND => Error::NotFound {
            resource: path.to_owned(),
            payload,
        },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Unauthorized {
            message: format!("access to {path} was denied"),
            payload,
        },
        StatusCode::BAD_REQUEST => Error::BadRequest {
            message: format!("the request to {path} was rejected"),
            payload,
        },
        other => Error::UnknownApi {
            status: Some(other.as_u16()),
            message: match payload {
                Some(body) => format!("{path} answered {other}: {body}"),
                None => format!("{path} answered {other}"),
            },
        },
    }
}
