// ABOUTME: Access credential passed to every Strava API call
// ABOUTME: Carries the bearer secret, its identity for caching, and the write-scope flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

/// OAuth access token used to authenticate against the Strava API.
///
/// The secret doubles as the credential's identity: the service registry
/// caches one service instance per `(secret, service type)` pair for the
/// credential's lifetime. Whether the token is still *valid* is never stored
/// here: validity can only be established by re-probing an authenticated
/// endpoint, which the service layer does after catching an authorization
/// failure.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AccessToken {
    secret: String,
    write_access: bool,
}

impl AccessToken {
    /// Wrap a bearer secret, recording whether write scope was granted.
    #[must_use]
    pub fn new(secret: impl Into<String>, write_access: bool) -> Self {
        Self {
            secret: secret.into(),
            write_access,
        }
    }

    /// The bearer secret sent with each request; also the cache identity.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Whether the token was granted write scope.
    ///
    /// This is a local flag; write endpoints check it before issuing any
    /// network call.
    #[must_use]
    pub const fn has_write_access(&self) -> bool {
        self.write_access
    }
}

// Keep the secret out of logs and error chains.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("secret", &"<redacted>")
            .field("write_access", &self.write_access)
            .finish()
    }
}
