//! Consistency Poller Tests
//!
//! Drives the poll-until-stable loop with fake resources under a paused
//! clock, covering settle-after-a-few-polls, exhausted attempts, and error
//! propagation.

use std::future::Future;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use anyhow::Result;
use strava_client::errors::Error;
use strava_client::models::{ResourceState, ResourceStateful};
use strava_client::poller::{poll_until_stable, MAX_POLL_ATTEMPTS};

#[derive(Debug, Clone)]
struct FakeResource {
    state: ResourceState,
    fetch_number: u32,
}

impl ResourceStateful for FakeResource {
    fn resource_state(&self) -> ResourceState {
        self.state
    }
}

/// Fake fetch: `Updating` for the first `updating_for` fetches, `Detailed`
/// afterwards.
fn settling_fetch(
    fetches: &AtomicU32,
    updating_for: u32,
) -> impl Future<Output = strava_client::Result<FakeResource>> + '_ {
    let fetch_number = fetches.fetch_add(1, Ordering::SeqCst) + 1;
    let state = if fetch_number <= updating_for {
        ResourceState::Updating
    } else {
        ResourceState::Detailed
    };
    async move {
        Ok(FakeResource {
            state,
            fetch_number,
        })
    }
}

#[tokio::test(start_paused = true)]
async fn stable_resource_returns_on_the_first_fetch() -> Result<()> {
    let fetches = AtomicU32::new(0);
    let resource = poll_until_stable(|| settling_fetch(&fetches, 0)).await?;

    assert_eq!(resource.resource_state(), ResourceState::Detailed);
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn updating_resource_is_refetched_until_it_settles() -> Result<()> {
    let fetches = AtomicU32::new(0);
    let started = tokio::time::Instant::now();
    let resource = poll_until_stable(|| settling_fetch(&fetches, 3)).await?;

    assert_eq!(resource.resource_state(), ResourceState::Detailed);
    assert_eq!(resource.fetch_number, 4);
    assert_eq!(fetches.load(Ordering::SeqCst), 4);
    // Three waits: 1100ms, 1200ms, 1300ms.
    assert!(started.elapsed() >= Duration::from_millis(3600));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn exhausted_attempts_return_the_last_updating_result() -> Result<()> {
    let fetches = AtomicU32::new(0);
    let resource = poll_until_stable(|| settling_fetch(&fetches, u32::MAX)).await?;

    // The contract is a bounded wait, not guaranteed stability.
    assert_eq!(resource.resource_state(), ResourceState::Updating);
    assert_eq!(fetches.load(Ordering::SeqCst), MAX_POLL_ATTEMPTS);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn fetch_failures_propagate_immediately() -> Result<()> {
    let fetches = AtomicU32::new(0);
    let result = poll_until_stable(|| {
        fetches.fetch_add(1, Ordering::SeqCst);
        async {
            Err::<FakeResource, _>(Error::UnknownApi {
                status: Some(500),
                message: "provider exploded".to_owned(),
            })
        }
    })
    .await;

    assert!(matches!(result, Err(Error::UnknownApi { .. })));
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
    Ok(())
}
