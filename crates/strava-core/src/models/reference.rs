// ABOUTME: Resource-state reference enum with its Strava wire codes
// ABOUTME: Liveness/consistency marker carried by every domain record
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// State of a resource returned from Strava.
///
/// This is a liveness/consistency signal, not an authorization state: a
/// private resource still reports `Meta`, while a resource mid-update reports
/// `Updating` until the provider settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceState {
    /// The resource is currently being updated by the provider
    Updating,
    /// Representation carrying the id only
    Meta,
    /// Summary representation
    Summary,
    /// Detailed representation
    Detailed,
    /// The provider sent a state code this client does not recognize
    Unknown,
}

impl ResourceState {
    /// Map a wire code to its state, defaulting to `Unknown` for unmapped codes.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            -1 => Self::Updating,
            1 => Self::Meta,
            2 => Self::Summary,
            3 => Self::Detailed,
            _ => Self::Unknown,
        }
    }

    /// The wire code for this state; `Unknown` has no valid outbound code.
    #[must_use]
    pub const fn code(self) -> Option<i64> {
        match self {
            Self::Updating => Some(-1),
            Self::Meta => Some(1),
            Self::Summary => Some(2),
            Self::Detailed => Some(3),
            Self::Unknown => None,
        }
    }
}

impl From<i64> for ResourceState {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl Serialize for ResourceState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.code().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ResourceState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i64::deserialize(deserializer)?;
        Ok(Self::from_code(code))
    }
}

/// A record exposing its resource state.
///
/// The consistency poller only needs this one accessor, so any record
/// implementing it can be polled until stable.
pub trait ResourceStateful {
    /// Current state of the record, `Unknown` when the provider omitted it.
    fn resource_state(&self) -> ResourceState;
}

#[cfg(test)]
mod tests {
    use super::ResourceState;

    #[test]
    fn every_defined_code_round_trips() {
        for state in [
            ResourceState::Updating,
            ResourceState::Meta,
            ResourceState::Summary,
            ResourceState::Detailed,
        ] {
            let code = state.code().expect("defined states carry a code");
            assert_eq!(ResourceState::from_code(code), state);
        }
    }

    #[test]
    fn unmapped_codes_fall_back_to_unknown() {
        for code in [0, 4, 99, -7] {
            assert_eq!(ResourceState::from_code(code), ResourceState::Unknown);
        }
        assert_eq!(ResourceState::Unknown.code(), None);
    }
}
