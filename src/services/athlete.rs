// ABOUTME: Athlete operations: profiles and aggregated statistics
// ABOUTME: The authenticated-athlete fetch doubles as the credential validity probe
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use strava_core::errors::{Error, Result};
use strava_core::models::{Athlete, AthleteStats};

use crate::recovery::{credential_still_valid, recover_resource};
use crate::transport::Transport;

/// Athlete operations.
pub struct AthleteService {
    transport: Arc<Transport>,
}

impl AthleteService {
    pub(crate) const fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Fetch the authenticated athlete.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential does not authenticate. This is the
    /// same call the recovery layer uses as its validity probe, so it is
    /// never absorbed here.
    pub async fn get_authenticated_athlete(&self) -> Result<Athlete> {
        self.transport.get("/athlete", &[]).await
    }

    /// Fetch another athlete's profile.
    ///
    /// Returns `None` when the athlete does not exist and a meta placeholder
    /// when the profile is private.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential itself no longer authenticates.
    pub async fn get_athlete(&self, id: i64) -> Result<Option<Athlete>> {
        match self.transport.get(&format!("/athletes/{id}"), &[]).await {
            Ok(athlete) => Ok(Some(athlete)),
            Err(err) => recover_resource(err, &self.transport, id).await,
        }
    }

    /// Fetch an athlete's rolled-up statistics.
    ///
    /// Returns `None` when the athlete does not exist or the statistics are
    /// private; there is no meaningful placeholder for totals.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential itself no longer authenticates.
    pub async fn athlete_statistics(&self, id: i64) -> Result<Option<AthleteStats>> {
        match self
            .transport
            .get(&format!("/athletes/{id}/stats"), &[])
            .await
        {
            Ok(stats) => Ok(Some(stats)),
            Err(Error::NotFound { .. }) => Ok(None),
            Err(err @ Error::Unauthorized { .. }) => {
                if credential_still_valid(&self.transport).await {
                    Ok(None)
                } else {
                    Err(err)
                }
            }
            Err(err) => Err(err),
        }
    }
}
