// ABOUTME: Page-window types for server-paginated Strava collections
// ABOUTME: Paging instruction plus the policy bounding default and maximum page sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

/// One window over an ordered, server-paginated collection.
///
/// Both components are kept at 1 or above; the constructor clamps rather than
/// fails, since a zero page or page size has no meaning on the wire. A value
/// is immutable once built; the pagination engine derives a fresh instruction
/// for every page it fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    page: u32,
    per_page: u32,
}

impl Paging {
    /// Create a paging instruction, clamping both components to at least 1.
    #[must_use]
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Instruction for the first page of the given size.
    #[must_use]
    pub fn first(per_page: u32) -> Self {
        Self::new(1, per_page)
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested number of items per page.
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }
}

/// Policy bounding how the pagination engine slices requests.
#[derive(Debug, Clone, Copy)]
pub struct PagingConfig {
    /// Page size applied when a caller supplies no instruction
    pub default_page_size: u32,
    /// Largest page the provider will serve in one round trip
    pub max_page_size: u32,
    /// When set, an explicit request larger than `max_page_size` is satisfied
    /// by issuing several provider-sized fetches; when unset it is clamped
    pub ignore_limit_on_explicit_request: bool,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: 30,
            max_page_size: 200,
            ignore_limit_on_explicit_request: true,
        }
    }
}
