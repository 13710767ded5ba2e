// ABOUTME: Logical Strava API services
// ABOUTME: Each service composes pagination, polling, and recovery around transport calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logical operations over the Strava API.
//!
//! Services are stateless beyond their shared transport: independent
//! operations on one instance may run concurrently. Instances are obtained
//! through [`crate::Strava`] and cached per credential in the
//! [`crate::registry::ServiceRegistry`].

/// Activity CRUD, sub-resources, and activity listings
pub mod activity;
/// Athlete profiles and statistics
pub mod athlete;
/// Clubs, membership, and club listings
pub mod club;
/// Recurring club group events
pub mod club_event;
/// Token lifecycle (deauthorization)
pub mod token;

pub use activity::ActivityService;
pub use athlete::AthleteService;
pub use club::ClubService;
pub use club_event::ClubGroupEventService;
pub use token::TokenService;

/// Query string for one paging window.
pub(crate) fn paging_query(page: strava_core::paging::Paging) -> [(&'static str, String); 2] {
    [
        ("page", page.page().to_string()),
        ("per_page", page.per_page().to_string()),
    ]
}
