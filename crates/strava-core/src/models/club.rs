// ABOUTME: Club and group event models
// ABOUTME: Club, membership responses, and recurring group events
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reference::{ResourceState, ResourceStateful};

/// A club as returned by Strava.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Club {
    /// Unique club identifier
    pub id: i64,
    /// Representation state of this record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_state: Option<ResourceState>,
    /// Club name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sport the club is organized around
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport_type: Option<String>,
    /// Home city
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Home country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Whether the club is private
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    /// Number of members
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,
}

impl ResourceStateful for Club {
    fn resource_state(&self) -> ResourceState {
        self.resource_state.unwrap_or(ResourceState::Unknown)
    }
}

/// Outcome of a club join or leave request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClubMembership {
    /// Whether the request was accepted
    #[serde(default)]
    pub success: bool,
    /// Whether the athlete's membership is now active
    #[serde(default)]
    pub active: bool,
}

impl ClubMembership {
    /// Response reported when the club is missing or inaccessible.
    #[must_use]
    pub const fn failed() -> Self {
        Self {
            success: false,
            active: false,
        }
    }
}

/// A recurring group event belonging to a club.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClubEvent {
    /// Unique event identifier
    pub id: i64,
    /// Representation state of this record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_state: Option<ResourceState>,
    /// Event title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Identifier of the organizing club
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_id: Option<i64>,
    /// Activity type of the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    /// Next occurrences in UTC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming_occurrences: Option<Vec<DateTime<Utc>>>,
    /// Whether only club members may see the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

impl ResourceStateful for ClubEvent {
    fn resource_state(&self) -> ResourceState {
        self.resource_state.unwrap_or(ResourceState::Unknown)
    }
}

/// Outcome of joining a group event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventJoinResponse {
    /// Whether the authenticated athlete is now joined to the event
    #[serde(default)]
    pub joined: bool,
}
