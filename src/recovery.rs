// ABOUTME: Per-endpoint failure recovery for the service layer
// ABOUTME: Absorbs not-found and private-resource denials, synthesizes local error kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Failure recovery applied at the service boundary.
//!
//! Strava answers 401/403 both when a token is revoked and when a resource is
//! merely private. The only way to tell the cases apart is to re-probe an
//! authenticated endpoint with the same credential, after the failure is
//! caught and never before the call. That check is deliberately
//! unconditional on every occurrence: a cached validity flag could mask a
//! freshly revoked token as "just private".

use tracing::debug;

use strava_core::errors::{Error, Result};
use strava_core::models::{AccessToken, Activity, Athlete, Club, ClubEvent, ResourceState};

use crate::transport::Transport;

/// A record that can stand in for a private, inaccessible resource.
///
/// The placeholder carries only the identifier and the `Meta` state.
pub(crate) trait PrivatePlaceholder {
    fn private_placeholder(id: i64) -> Self;
}

impl PrivatePlaceholder for Activity {
    fn private_placeholder(id: i64) -> Self {
        Self {
            id,
            resource_state: Some(ResourceState::Meta),
            ..Self::default()
        }
    }
}

impl PrivatePlaceholder for Athlete {
    fn private_placeholder(id: i64) -> Self {
        Self {
            id,
            resource_state: Some(ResourceState::Meta),
            ..Self::default()
        }
    }
}

impl PrivatePlaceholder for Club {
    fn private_placeholder(id: i64) -> Self {
        Self {
            id,
            resource_state: Some(ResourceState::Meta),
            ..Self::default()
        }
    }
}

impl PrivatePlaceholder for ClubEvent {
    fn private_placeholder(id: i64) -> Self {
        Self {
            id,
            resource_state: Some(ResourceState::Meta),
            ..Self::default()
        }
    }
}

/// Re-probe whether the credential still authenticates.
///
/// Fetches the authenticated athlete; anything but success counts as
/// invalid, so a revoked token is never mistaken for a private resource.
pub(crate) async fn credential_still_valid(transport: &Transport) -> bool {
    match transport.get::<Athlete>("/athlete", &[]).await {
        Ok(_) => true,
        Err(err) => {
            debug!(error = %err, "credential validity probe failed");
            false
        }
    }
}

/// Recovery for single-resource reads.
///
/// `NotFound` becomes `Ok(None)`; `Unauthorized` with a still-valid
/// credential means the resource exists but is private, so a meta
/// placeholder is synthesized; everything else re-raises.
pub(crate) async fn recover_resource<T: PrivatePlaceholder>(
    err: Error,
    transport: &Transport,
    id: i64,
) -> Result<Option<T>> {
    match err {
        Error::NotFound { .. } => Ok(None),
        Error::Unauthorized { .. } => {
            if credential_still_valid(transport).await {
                Ok(Some(T::private_placeholder(id)))
            } else {
                Err(err)
            }
        }
        other => Err(other),
    }
}

/// Recovery for list reads scoped to a parent resource.
///
/// `NotFound` means the parent does not exist (`Ok(None)`); `Unauthorized`
/// with a still-valid credential means the parent is private and its
/// children inaccessible (`Ok(Some(vec![]))`); everything else re-raises.
pub(crate) async fn recover_list<T>(err: Error, transport: &Transport) -> Result<Option<Vec<T>>> {
    match err {
        Error::NotFound { .. } => Ok(None),
        Error::Unauthorized { .. } => {
            if credential_still_valid(transport).await {
                Ok(Some(Vec::new()))
            } else {
                Err(err)
            }
        }
        other => Err(other),
    }
}

/// Refuse a write endpoint locally when the token has no write scope.
///
/// Saves the round trip the provider would reject anyway and standardizes
/// the error the caller sees.
pub(crate) fn require_write_scope(token: &AccessToken, action: &str) -> Result<()> {
    if token.has_write_access() {
        Ok(())
    } else {
        Err(Error::WriteAccessRequired {
            action: action.to_owned(),
        })
    }
}

/// Reinterpret `BadRequest` on a create-style endpoint as caller error.
pub(crate) fn caller_data_rejected(err: Error) -> Error {
    match err {
        Error::BadRequest { message, payload } => Error::InvalidArgument {
            message: match payload {
                Some(payload) => format!("{message}: {payload}"),
                None => message,
            },
        },
        other => other,
    }
}
