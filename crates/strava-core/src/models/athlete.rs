// ABOUTME: Athlete profile and statistics models
// ABOUTME: Athlete, AthleteStats, and ActivityTotals definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use super::reference::{ResourceState, ResourceStateful};

/// An athlete profile as returned by Strava.
///
/// Everything beyond the id is optional: meta representations carry the id
/// only, and private profiles hide most fields even in summary form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Athlete {
    /// Unique athlete identifier
    pub id: i64,
    /// Representation state of this record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_state: Option<ResourceState>,
    /// Public username/handle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    /// Home city
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Home country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// URL of the profile picture
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Whether this athlete's profile is private
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium: Option<bool>,
    /// Number of athletes this athlete follows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friend_count: Option<u32>,
    /// Number of athletes following this athlete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_count: Option<u32>,
}

impl ResourceStateful for Athlete {
    fn resource_state(&self) -> ResourceState {
        self.resource_state.unwrap_or(ResourceState::Unknown)
    }
}

/// Rolled-up totals for one category of activities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityTotals {
    /// Number of activities
    #[serde(default)]
    pub count: u64,
    /// Total distance (meters)
    #[serde(default)]
    pub distance: f64,
    /// Total moving time (seconds)
    #[serde(default)]
    pub moving_time: u64,
    /// Total elapsed time (seconds)
    #[serde(default)]
    pub elapsed_time: u64,
    /// Total elevation gained (meters)
    #[serde(default)]
    pub elevation_gain: f64,
}

/// Aggregated statistics for an athlete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AthleteStats {
    /// Longest recorded ride (meters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biggest_ride_distance: Option<f64>,
    /// Largest single-ride climb (meters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biggest_climb_elevation_gain: Option<f64>,
    /// Ride totals over the last four weeks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_ride_totals: Option<ActivityTotals>,
    /// Run totals over the last four weeks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_run_totals: Option<ActivityTotals>,
    /// Year-to-date ride totals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ytd_ride_totals: Option<ActivityTotals>,
    /// Year-to-date run totals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ytd_run_totals: Option<ActivityTotals>,
    /// All-time ride totals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_ride_totals: Option<ActivityTotals>,
    /// All-time run totals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_run_totals: Option<ActivityTotals>,
}
