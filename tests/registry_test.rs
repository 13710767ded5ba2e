//! Service Registry Tests
//!
//! Verifies the one-instance-per-(credential, service-type) guarantee,
//! including under concurrent first access, and credential-scoped eviction.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use strava_client::models::AccessToken;
use strava_client::registry::ServiceRegistry;
use strava_client::{Strava, StravaConfig};
use tokio::sync::Barrier;

struct CountingService {
    serial: usize,
}

struct OtherService;

#[tokio::test]
async fn concurrent_first_lookups_yield_the_identical_instance() -> Result<()> {
    let registry = Arc::new(ServiceRegistry::new());
    let token = AccessToken::new("registry-token-a", false);
    let constructed = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(8));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let registry = Arc::clone(&registry);
        let token = token.clone();
        let constructed = Arc::clone(&constructed);
        let barrier = Arc::clone(&barrier);
        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            registry.get_or_create(&token, || CountingService {
                serial: constructed.fetch_add(1, Ordering::SeqCst),
            })
        }));
    }

    let mut instances: Vec<Arc<CountingService>> = Vec::new();
    for handle in handles {
        instances.push(handle.await?);
    }

    // A race must not produce two live instances.
    assert_eq!(constructed.load(Ordering::SeqCst), 1);
    for instance in &instances[1..] {
        assert!(Arc::ptr_eq(&instances[0], instance));
        assert_eq!(instance.serial, instances[0].serial);
    }
    Ok(())
}

#[tokio::test]
async fn instances_are_keyed_by_credential_and_service_type() -> Result<()> {
    let registry = ServiceRegistry::new();
    let token_a = AccessToken::new("registry-token-b", false);
    let token_b = AccessToken::new("registry-token-c", false);

    let first = registry.get_or_create(&token_a, || CountingService { serial: 1 });
    let same_key = registry.get_or_create(&token_a, || CountingService { serial: 2 });
    let other_token = registry.get_or_create(&token_b, || CountingService { serial: 3 });
    let other_type = registry.get_or_create(&token_a, || OtherService);

    assert!(Arc::ptr_eq(&first, &same_key));
    assert_eq!(same_key.serial, 1);
    assert!(!Arc::ptr_eq(&first, &other_token));
    drop(other_type);
    assert_eq!(registry.len(), 3);
    Ok(())
}

#[tokio::test]
async fn discarding_a_credential_evicts_only_its_instances() -> Result<()> {
    let registry = ServiceRegistry::new();
    let discarded = AccessToken::new("registry-token-d", false);
    let kept = AccessToken::new("registry-token-e", false);

    let _ = registry.get_or_create(&discarded, || CountingService { serial: 1 });
    let survivor = registry.get_or_create(&kept, || CountingService { serial: 2 });

    registry.discard_credential(&discarded);

    assert_eq!(registry.len(), 1);
    let still_there = registry.get_or_create(&kept, || CountingService { serial: 3 });
    assert!(Arc::ptr_eq(&survivor, &still_there));
    Ok(())
}

#[tokio::test]
async fn two_clients_with_one_credential_share_service_instances() -> Result<()> {
    let registry = Arc::new(ServiceRegistry::new());
    let token = AccessToken::new("registry-token-f", false);
    let config = StravaConfig::from_env();

    let first = Strava::with_registry(token.clone(), config.clone(), Arc::clone(&registry));
    let second = Strava::with_registry(token, config, Arc::clone(&registry));

    assert!(Arc::ptr_eq(&first.activities(), &second.activities()));
    assert!(Arc::ptr_eq(&first.clubs(), &second.clubs()));
    // Asking the same client twice is also the same instance.
    assert!(Arc::ptr_eq(&first.athletes(), &first.athletes()));
    Ok(())
}
