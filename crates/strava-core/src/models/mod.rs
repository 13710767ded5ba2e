// ABOUTME: Domain models returned by the Strava v3 API
// ABOUTME: Activity, athlete, and club records plus reference enums and the access token
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Activity records and their nested sub-resources
pub mod activity;
/// Athlete profile and statistics records
pub mod athlete;
/// Club, club membership, and group event records
pub mod club;
/// Reference data: resource states and the `ResourceStateful` trait
pub mod reference;
/// The caller's access credential
pub mod token;

pub use activity::{
    Activity, ActivityUpdate, ActivityZone, Comment, Lap, NewActivity, Photo, SegmentEffort,
};
pub use athlete::{ActivityTotals, Athlete, AthleteStats};
pub use club::{Club, ClubEvent, ClubMembership, EventJoinResponse};
pub use reference::{ResourceState, ResourceStateful};
pub use token::AccessToken;
