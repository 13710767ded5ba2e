//! Pagination Engine Tests
//!
//! Exercises bounded and fetch-everything paging over fake page sources,
//! including the minimal-fetch guarantee, short-page termination, and the
//! not-found-as-exhaustion provider quirk.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use strava_client::errors::Error;
use strava_client::pagination::{fetch_all, fetch_page};
use strava_client::{Paging, PagingConfig};

/// Policy with a small provider cap so multi-page behavior is easy to drive.
fn test_config() -> PagingConfig {
    PagingConfig {
        default_page_size: 30,
        max_page_size: 100,
        ignore_limit_on_explicit_request: true,
    }
}

/// A fake provider serving `total` sequential items, counting fetches.
fn page_of(total: u32, page: Paging) -> Vec<u32> {
    let start = (page.page() - 1) * page.per_page();
    let end = (start + page.per_page()).min(total);
    if start >= total {
        Vec::new()
    } else {
        (start..end).collect()
    }
}

#[tokio::test]
async fn defaults_apply_when_no_instruction_is_given() -> Result<()> {
    let calls = AtomicUsize::new(0);
    let items = fetch_page(&test_config(), None, |page| {
        calls.fetch_add(1, Ordering::SeqCst);
        async move { Ok(page_of(500, page)) }
    })
    .await?;

    assert_eq!(items, (0..30).collect::<Vec<_>>());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn small_window_is_a_single_fetch() -> Result<()> {
    let calls = AtomicUsize::new(0);
    let items = fetch_page(&test_config(), Some(Paging::new(2, 10)), |page| {
        calls.fetch_add(1, Ordering::SeqCst);
        async move { Ok(page_of(500, page)) }
    })
    .await?;

    assert_eq!(items, (10..20).collect::<Vec<_>>());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn oversized_window_uses_the_minimum_number_of_fetches() -> Result<()> {
    let calls = AtomicUsize::new(0);
    let items = fetch_page(&test_config(), Some(Paging::new(1, 250)), |page| {
        calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(page.per_page(), 100);
        async move { Ok(page_of(500, page)) }
    })
    .await?;

    assert_eq!(items, (0..250).collect::<Vec<_>>());
    // 250 items at a 100-item provider cap: three pages, no more.
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    Ok(())
}

#[tokio::test]
async fn oversized_window_with_offset_skips_the_leading_overlap() -> Result<()> {
    let calls = AtomicUsize::new(0);
    // Page 2 of 250 covers items 250..500, which straddles provider pages
    // 3..=5; the engine must drop the first 50 items of provider page 3.
    let items = fetch_page(&test_config(), Some(Paging::new(2, 250)), |page| {
        calls.fetch_add(1, Ordering::SeqCst);
        async move { Ok(page_of(500, page)) }
    })
    .await?;

    assert_eq!(items, (250..500).collect::<Vec<_>>());
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    Ok(())
}

#[tokio::test]
async fn short_page_ends_an_oversized_window_early() -> Result<()> {
    let calls = AtomicUsize::new(0);
    let items = fetch_page(&test_config(), Some(Paging::new(1, 300)), |page| {
        calls.fetch_add(1, Ordering::SeqCst);
        async move { Ok(page_of(120, page)) }
    })
    .await?;

    // Data ran out: the caller gets what exists, never an error.
    assert_eq!(items, (0..120).collect::<Vec<_>>());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn caller_never_receives_more_than_requested() -> Result<()> {
    let items = fetch_page(&test_config(), Some(Paging::new(1, 150)), |page| async move {
        Ok(page_of(500, page))
    })
    .await?;

    assert_eq!(items.len(), 150);
    assert_eq!(items, (0..150).collect::<Vec<_>>());
    Ok(())
}

#[tokio::test]
async fn oversized_window_is_clamped_when_the_policy_keeps_the_cap() -> Result<()> {
    let config = PagingConfig {
        ignore_limit_on_explicit_request: false,
        ..test_config()
    };
    let calls = AtomicUsize::new(0);
    let items = fetch_page(&config, Some(Paging::new(1, 250)), |page| {
        calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(page.per_page(), 100);
        async move { Ok(page_of(500, page)) }
    })
    .await?;

    assert_eq!(items.len(), 100);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn not_found_on_the_first_page_propagates() -> Result<()> {
    let result = fetch_page(&test_config(), Some(Paging::new(1, 10)), |_page| async move {
        Err::<Vec<u32>, _>(Error::NotFound {
            resource: "/clubs/1/members".to_owned(),
            payload: None,
        })
    })
    .await;

    assert!(matches!(result, Err(Error::NotFound { .. })));
    Ok(())
}

#[tokio::test]
async fn not_found_on_a_later_page_is_end_of_data() -> Result<()> {
    let calls = AtomicUsize::new(0);
    let items = fetch_all(&test_config(), |page| {
        calls.fetch_add(1, Ordering::SeqCst);
        async move {
            // Two full pages, then the provider signals exhaustion with 404.
            if page.page() <= 2 {
                Ok(page_of(u32::MAX, page))
            } else {
                Err(Error::NotFound {
                    resource: "/activities/following".to_owned(),
                    payload: None,
                })
            }
        }
    })
    .await?;

    assert_eq!(items, (0..200).collect::<Vec<_>>());
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    Ok(())
}

#[tokio::test]
async fn fetch_all_terminates_on_a_short_page_and_preserves_order() -> Result<()> {
    let calls = AtomicUsize::new(0);
    let items = fetch_all(&test_config(), |page| {
        calls.fetch_add(1, Ordering::SeqCst);
        async move { Ok(page_of(250, page)) }
    })
    .await?;

    assert_eq!(items, (0..250).collect::<Vec<_>>());
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    Ok(())
}

#[tokio::test]
async fn fetch_all_terminates_on_an_empty_first_page() -> Result<()> {
    let calls = AtomicUsize::new(0);
    let items = fetch_all(&test_config(), |_page| {
        calls.fetch_add(1, Ordering::SeqCst);
        async move { Ok(Vec::<u32>::new()) }
    })
    .await?;

    assert!(items.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn paging_components_are_clamped_to_at_least_one() -> Result<()> {
    let paging = Paging::new(0, 0);
    assert_eq!(paging.page(), 1);
    assert_eq!(paging.per_page(), 1);
    Ok(())
}
