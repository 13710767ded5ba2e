// ABOUTME: Activity models and their nested sub-resources
// ABOUTME: Activity, update/create payloads, zones, laps, segment efforts, comments, photos
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::athlete::Athlete;
use super::reference::{ResourceState, ResourceStateful};

/// An activity as returned by Strava.
///
/// Everything beyond the id is optional. Meta representations (and the
/// placeholder synthesized for private activities) carry the id and state
/// only; summary and detailed representations fill in the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity identifier
    pub id: i64,
    /// Representation state of this record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_state: Option<ResourceState>,
    /// Activity name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Athlete who recorded the activity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athlete: Option<Athlete>,
    /// Activity type as reported by the provider (e.g. `"Ride"`, `"Run"`)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    /// Distance (meters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Moving time (seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moving_time: Option<u64>,
    /// Elapsed time (seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<u64>,
    /// Total elevation gain (meters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_elevation_gain: Option<f64>,
    /// Start time in UTC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Whether the activity is private
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    /// Whether the activity was tagged as a commute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commute: Option<bool>,
    /// Whether the activity was recorded on a trainer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer: Option<bool>,
    /// Identifier of the gear used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gear_id: Option<String>,
    /// Average speed (meters per second)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_speed: Option<f64>,
    /// Maximum speed (meters per second)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<f64>,
    /// Average power (watts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_watts: Option<f64>,
    /// Kudos received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kudos_count: Option<u32>,
    /// Comment count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<u32>,
    /// Segment efforts, present on detailed representations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_efforts: Option<Vec<SegmentEffort>>,
}

impl ResourceStateful for Activity {
    fn resource_state(&self) -> ResourceState {
        self.resource_state.unwrap_or(ResourceState::Unknown)
    }
}

/// Payload for updating an existing activity.
///
/// Only the fields set are submitted; `None` leaves the provider value
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityUpdate {
    /// New activity name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New activity type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New privacy flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    /// New commute flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commute: Option<bool>,
    /// New trainer flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer: Option<bool>,
    /// New gear identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gear_id: Option<String>,
}

/// Payload for creating a manual activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivity {
    /// Activity name
    pub name: String,
    /// Activity type (e.g. `"Ride"`, `"Run"`)
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Start time in UTC
    pub start_date_local: DateTime<Utc>,
    /// Elapsed time (seconds)
    pub elapsed_time: u64,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Distance (meters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Heart-rate or power distribution for one activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityZone {
    /// Zone kind as reported by the provider (`"heartrate"` or `"power"`)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub zone_type: Option<String>,
    /// Suffer score attributed to this zone set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    /// Whether the athlete's zones were custom
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_zones: Option<bool>,
    /// Whether the data came from a sensor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor_based: Option<bool>,
}

/// One lap of an activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lap {
    /// Unique lap identifier
    pub id: i64,
    /// Representation state of this record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_state: Option<ResourceState>,
    /// Lap name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Parent activity reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<Activity>,
    /// Athlete reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athlete: Option<Athlete>,
    /// Elapsed time (seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<u64>,
    /// Distance (meters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Average power over the lap (watts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_watts: Option<f64>,
    /// Whether power came from a meter rather than an estimate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_watts: Option<bool>,
}

/// One segment effort within an activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentEffort {
    /// Unique effort identifier
    pub id: i64,
    /// Representation state of this record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_state: Option<ResourceState>,
    /// Effort name (usually the segment name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Parent activity reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<Activity>,
    /// Athlete reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athlete: Option<Athlete>,
    /// Elapsed time (seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<u64>,
    /// Start time in UTC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
}

/// A comment left on an activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    pub id: i64,
    /// Representation state of this record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_state: Option<ResourceState>,
    /// Identifier of the activity commented on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<i64>,
    /// Comment text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Author of the comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athlete: Option<Athlete>,
    /// Creation time in UTC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A photo attached to an activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Photo {
    /// Unique photo identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Representation state of this record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_state: Option<ResourceState>,
    /// Identifier of the activity the photo belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<i64>,
    /// Photo reference URL
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Caption
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Upload time in UTC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
