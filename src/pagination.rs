// ABOUTME: Pagination engine for server-paginated Strava collections
// ABOUTME: Bounded single-window fetches and unbounded fetch-everything loops over a page callback
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drives a page-fetch capability one page at a time.
//!
//! The engine knows nothing about endpoints: callers hand it a closure that
//! fetches one [`Paging`] window, and the engine decides how many provider
//! round trips the logical request needs. Page fetches are strictly
//! sequential (Strava's page numbers are only well-defined when walked in
//! order) and results preserve provider order. Dropping the returned future
//! cancels between fetches.

use std::future::Future;

use tracing::debug;

use strava_core::errors::{Error, Result};
use strava_core::paging::{Paging, PagingConfig};

/// Fetch one bounded window of a paginated collection.
///
/// With no instruction, the first page at the policy's default size is
/// fetched. An instruction no larger than the provider's page cap turns into
/// a single fetch. A larger one is satisfied transparently with several
/// max-size fetches (when the policy allows ignoring the cap), concatenated
/// until the requested count is reached or the provider returns a short page;
/// the caller never receives more than it asked for. When the policy keeps
/// the cap, the oversized request is clamped.
///
/// `NotFound` from the first fetch propagates: whether a missing parent
/// resource means `None` or an error is the caller's call, not the engine's.
/// `NotFound` from a later fetch is treated as end-of-data, since the
/// provider signals exhaustion this way.
///
/// # Errors
///
/// Returns whatever the capability raises on the first page, and any
/// non-`NotFound` failure from later pages.
pub async fn fetch_page<T, F, Fut>(
    config: &PagingConfig,
    instruction: Option<Paging>,
    fetch: F,
) -> Result<Vec<T>>
where
    F: Fn(Paging) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let instruction = instruction.unwrap_or_else(|| Paging::first(config.default_page_size));
    let requested = instruction.per_page();
    let max = config.max_page_size.max(1);

    if requested <= max {
        let mut items = fetch(instruction).await?;
        items.truncate(requested as usize);
        return Ok(items);
    }

    if !config.ignore_limit_on_explicit_request {
        debug!(requested, max, "clamping oversized page request to provider cap");
        let mut items = fetch(Paging::new(instruction.page(), max)).await?;
        items.truncate(max as usize);
        return Ok(items);
    }

    // The window spans several provider pages: walk max-size pages covering
    // the requested item range, dropping any leading overlap on the first.
    let needed = requested as usize;
    let start_offset = u64::from(instruction.page() - 1) * u64::from(requested);
    let mut provider_page = (start_offset / u64::from(max)) as u32 + 1;
    let mut skip = (start_offset % u64::from(max)) as usize;
    let mut collected: Vec<T> = Vec::with_capacity(needed);
    let mut first_fetch = true;

    loop {
        let page_items = match fetch(Paging::new(provider_page, max)).await {
            Ok(items) => items,
            Err(Error::NotFound { .. }) if !first_fetch => break,
            Err(err) => return Err(err),
        };

        let fetched = page_items.len();
        let remaining = needed - collected.len();
        collected.extend(page_items.into_iter().skip(skip).take(remaining));
        skip = 0;
        first_fetch = false;

        if collected.len() >= needed || fetched < max as usize {
            break;
        }
        provider_page += 1;
    }

    Ok(collected)
}

/// Fetch the entire collection, regardless of how large it is.
///
/// Walks max-size pages from page 1 upward until the provider returns a page
/// shorter than requested (the empty page included), concatenating in
/// provider order. `NotFound` past the first page is exhaustion, not an
/// error.
///
/// # Errors
///
/// Returns whatever the capability raises on the first page, and any
/// non-`NotFound` failure from later pages.
pub async fn fetch_all<T, F, Fut>(config: &PagingConfig, fetch: F) -> Result<Vec<T>>
where
    F: Fn(Paging) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let page_size = config.max_page_size.max(1);
    let mut page_number = 1;
    let mut collected: Vec<T> = Vec::new();

    loop {
        let page_items = match fetch(Paging::new(page_number, page_size)).await {
            Ok(items) => items,
            Err(Error::NotFound { .. }) if page_number > 1 => break,
            Err(err) => return Err(err),
        };

        let fetched = page_items.len();
        collected.extend(page_items);

        if fetched < page_size as usize {
            break;
        }
        page_number += 1;
    }

    Ok(collected)
}
