// ABOUTME: Typed asynchronous client for the Strava v3 API
// ABOUTME: Request orchestration core: pagination, consistency polling, error recovery, registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Strava Client
//!
//! Typed asynchronous client for the Strava v3 API. A logical call on one of
//! the services turns into zero, one, or many HTTP round trips: list
//! operations drive the pagination engine, single-resource fetches wait out
//! the provider's eventual consistency through the poller, and every failure
//! passes through per-endpoint recovery before a caller sees it.
//!
//! ```rust,no_run
//! use strava_client::{AccessToken, Strava};
//!
//! # async fn example() -> strava_client::Result<()> {
//! let client = Strava::new(AccessToken::new("token", false));
//! let activity = client.activities().get_activity(42, false).await?;
//! let members = client.clubs().list_all_club_members(7).await?;
//! # Ok(())
//! # }
//! ```

// Re-export strava-core modules so call sites can use `strava_client::models::*`.
pub use strava_core::errors;
pub use strava_core::models;
pub use strava_core::paging;

/// Client facade handing out registry-cached service instances
pub mod client;
/// Environment-backed endpoint and paging configuration
pub mod config;
/// Pagination engine driving bounded and fetch-everything page loops
pub mod pagination;
/// Consistency poller for resources stuck in the updating state
pub mod poller;
/// Service instance registry keyed by credential and service type
pub mod registry;
/// Logical API services composing the orchestration core
pub mod services;
/// HTTP transport over the shared reqwest client
pub mod transport;

mod recovery;

pub use client::Strava;
pub use config::StravaConfig;
pub use strava_core::errors::{Error, Result};
pub use strava_core::models::AccessToken;
pub use strava_core::paging::{Paging, PagingConfig};
