// ABOUTME: Token lifecycle operations
// ABOUTME: Deauthorization revokes the access token with the provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use strava_core::errors::Result;

use crate::transport::Transport;

/// Response to a deauthorization request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeauthorizationResponse {
    /// The token that was revoked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Token lifecycle operations.
pub struct TokenService {
    transport: Arc<Transport>,
}

impl TokenService {
    pub(crate) const fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Revoke the access token with the provider.
    ///
    /// The caller should discard the credential (and its cached services)
    /// afterwards; every further call with this token will raise
    /// `Unauthorized`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the token was already invalid.
    pub async fn deauthorize(&self) -> Result<DeauthorizationResponse> {
        let url = self.transport.config().deauthorize_url.clone();
        let secret = self.transport.token().secret().to_owned();
        let response = self
            .transport
            .post_form_absolute(&url, &[("access_token", secret)])
            .await?;
        info!("access token deauthorized");
        Ok(response)
    }
}
