// ABOUTME: Error taxonomy for Strava API operations
// ABOUTME: Transport-raised failures plus locally synthesized argument and scope errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unified error taxonomy for the client.
//!
//! The transport layer raises `NotFound`, `Unauthorized`, `BadRequest`, and
//! `UnknownApi`; the service layer synthesizes `InvalidArgument` and
//! `WriteAccessRequired` locally and absorbs or re-raises the transport
//! variants per endpoint policy. Callers only ever observe this taxonomy,
//! never a raw HTTP error.

use thiserror::Error;

/// Result alias used throughout the client.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by Strava API operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested resource does not exist (HTTP 404)
    #[error("resource not found: {resource}")]
    NotFound {
        /// Endpoint path that produced the 404
        resource: String,
        /// Offending response payload, when the provider sent one
        payload: Option<String>,
    },

    /// The request was not authorized (HTTP 401/403)
    ///
    /// Strava answers 401/403 both for revoked credentials and for private
    /// resources; the service layer disambiguates by re-probing the token.
    #[error("unauthorized: {message}")]
    Unauthorized {
        /// Description of the denied request
        message: String,
        /// Offending response payload, when the provider sent one
        payload: Option<String>,
    },

    /// The provider rejected the request as malformed (HTTP 400)
    #[error("bad request: {message}")]
    BadRequest {
        /// Description of the rejected request
        message: String,
        /// Offending response payload, when the provider sent one
        payload: Option<String>,
    },

    /// Caller-supplied data was invalid
    ///
    /// Synthesized locally from `BadRequest` on create-style endpoints, where
    /// the cause is the caller's input rather than the transport.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Why the argument was rejected
        message: String,
    },

    /// The operation needs write scope the token does not carry
    ///
    /// Raised before any network call is issued.
    #[error("cannot {action}: the access token does not have write scope")]
    WriteAccessRequired {
        /// Action that was refused
        action: String,
    },

    /// The provider answered in a way this client does not recognize
    #[error("unexpected Strava API failure: {message}")]
    UnknownApi {
        /// HTTP status, when the failure came from a decoded response
        status: Option<u16>,
        /// Description of the failure
        message: String,
    },
}

impl Error {
    /// True when this failure means the resource simply does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True when this failure came back as an authorization denial.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
