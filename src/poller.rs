// ABOUTME: Consistency poller for resources the provider is still updating
// ABOUTME: Bounded retry loop with linearly increasing backoff between fetches
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Waits out Strava's eventual consistency.
//!
//! After certain writes a resource is served in the `Updating` state for a
//! while. This poller refetches until the state settles or the attempt budget
//! runs out. The contract is a bounded wait, not guaranteed stability, so
//! the last fetch is returned even if still `Updating`. Works for any
//! [`ResourceStateful`] record; cancellation is dropping the future, which
//! takes effect at the sleep and fetch await points.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use strava_core::errors::Result;
use strava_core::models::{ResourceState, ResourceStateful};

/// Maximum number of fetch attempts before giving up on stability.
pub const MAX_POLL_ATTEMPTS: u32 = 10;

/// Base delay before the first refetch, in milliseconds.
pub const POLL_BASE_DELAY_MS: u64 = 1000;

/// Additional delay added per attempt, in milliseconds.
pub const POLL_DELAY_INCREMENT_MS: u64 = 100;

/// Refetch a resource until it stops reporting `Updating`.
///
/// Sleeps `1000 + attempt × 100` milliseconds between attempts. After
/// [`MAX_POLL_ATTEMPTS`] fetches the last result is returned as-is.
///
/// # Errors
///
/// Propagates the first failure the fetch capability raises; the poller only
/// retries the `Updating` state, never errors.
pub async fn poll_until_stable<R, F, Fut>(fetch: F) -> Result<R>
where
    R: ResourceStateful,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<R>>,
{
    let mut attempt = 0;
    loop {
        let resource = fetch().await?;
        attempt += 1;

        if resource.resource_state() != ResourceState::Updating {
            return Ok(resource);
        }
        if attempt >= MAX_POLL_ATTEMPTS {
            debug!(attempt, "resource still updating after final poll, returning as-is");
            return Ok(resource);
        }

        let delay = POLL_BASE_DELAY_MS + u64::from(attempt) * POLL_DELAY_INCREMENT_MS;
        debug!(attempt, delay_ms = delay, "resource updating, waiting before refetch");
        sleep(Duration::from_millis(delay)).await;
    }
}
