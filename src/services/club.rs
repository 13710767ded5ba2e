// ABOUTME: Club operations: lookup, listings, and membership changes
// ABOUTME: Missing or private clubs degrade to placeholders and failed-membership responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use strava_core::errors::{Error, Result};
use strava_core::models::{Activity, Athlete, Club, ClubMembership};
use strava_core::paging::{Paging, PagingConfig};

use crate::pagination::{fetch_all, fetch_page};
use crate::recovery::{
    credential_still_valid, recover_list, recover_resource, require_write_scope,
};
use crate::services::paging_query;
use crate::transport::Transport;

/// Club operations.
pub struct ClubService {
    transport: Arc<Transport>,
    paging: PagingConfig,
}

impl ClubService {
    pub(crate) const fn new(transport: Arc<Transport>, paging: PagingConfig) -> Self {
        Self { transport, paging }
    }

    /// Fetch a single club.
    ///
    /// Returns `None` when the club does not exist and a meta placeholder
    /// when it exists but is private.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential itself no longer authenticates.
    pub async fn get_club(&self, id: i64) -> Result<Option<Club>> {
        match self.transport.get(&format!("/clubs/{id}"), &[]).await {
            Ok(club) => Ok(Some(club)),
            Err(err) => recover_resource(err, &self.transport, id).await,
        }
    }

    /// List the clubs the authenticated athlete belongs to.
    ///
    /// # Errors
    ///
    /// Transport failures pass through unchanged.
    pub async fn list_my_clubs(&self) -> Result<Vec<Club>> {
        self.transport.get("/athlete/clubs", &[]).await
    }

    /// List the members of a club inside one paging window.
    ///
    /// Returns `None` when the club does not exist, the empty list when it is
    /// private.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential no longer authenticates.
    pub async fn list_club_members(
        &self,
        id: i64,
        paging: Option<Paging>,
    ) -> Result<Option<Vec<Athlete>>> {
        let listed = fetch_page(&self.paging, paging, |page| self.members_page(id, page)).await;
        match listed {
            Ok(athletes) => Ok(Some(athletes)),
            Err(err) => recover_list(err, &self.transport).await,
        }
    }

    /// List every member of a club.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential no longer authenticates.
    pub async fn list_all_club_members(&self, id: i64) -> Result<Option<Vec<Athlete>>> {
        let listed = fetch_all(&self.paging, |page| self.members_page(id, page)).await;
        match listed {
            Ok(athletes) => Ok(Some(athletes)),
            Err(err) => recover_list(err, &self.transport).await,
        }
    }

    async fn members_page(&self, id: i64, page: Paging) -> Result<Vec<Athlete>> {
        self.transport
            .get(&format!("/clubs/{id}/members"), &paging_query(page))
            .await
    }

    /// List a club's recent activities inside one paging window.
    ///
    /// Returns `None` when the club does not exist, the empty list when it is
    /// private.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential no longer authenticates.
    pub async fn list_recent_club_activities(
        &self,
        id: i64,
        paging: Option<Paging>,
    ) -> Result<Option<Vec<Activity>>> {
        let listed = fetch_page(&self.paging, paging, |page| self.activities_page(id, page)).await;
        match listed {
            Ok(activities) => Ok(Some(activities)),
            Err(err) => recover_list(err, &self.transport).await,
        }
    }

    /// List every recent activity of a club.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential no longer authenticates.
    pub async fn list_all_recent_club_activities(
        &self,
        id: i64,
    ) -> Result<Option<Vec<Activity>>> {
        let listed = fetch_all(&self.paging, |page| self.activities_page(id, page)).await;
        match listed {
            Ok(activities) => Ok(Some(activities)),
            Err(err) => recover_list(err, &self.transport).await,
        }
    }

    async fn activities_page(&self, id: i64, page: Paging) -> Result<Vec<Activity>> {
        // Strava answers null rather than an empty array for this feed.
        let activities: Option<Vec<Activity>> = self
            .transport
            .get(&format!("/clubs/{id}/activities"), &paging_query(page))
            .await?;
        Ok(activities.unwrap_or_default())
    }

    /// Join a club on behalf of the authenticated athlete.
    ///
    /// A missing or inaccessible club yields a failed membership response
    /// rather than an error.
    ///
    /// # Errors
    ///
    /// `WriteAccessRequired` without write scope (checked before any network
    /// call); `Unauthorized` when the credential no longer authenticates.
    pub async fn join_club(&self, id: i64) -> Result<ClubMembership> {
        require_write_scope(self.transport.token(), "join a club")?;
        self.membership_change(&format!("/clubs/{id}/join")).await
    }

    /// Leave a club on behalf of the authenticated athlete.
    ///
    /// A missing or inaccessible club yields a failed membership response
    /// rather than an error.
    ///
    /// # Errors
    ///
    /// `WriteAccessRequired` without write scope (checked before any network
    /// call); `Unauthorized` when the credential no longer authenticates.
    pub async fn leave_club(&self, id: i64) -> Result<ClubMembership> {
        require_write_scope(self.transport.token(), "leave a club")?;
        self.membership_change(&format!("/clubs/{id}/leave")).await
    }

    async fn membership_change(&self, path: &str) -> Result<ClubMembership> {
        match self.transport.post::<(), ClubMembership>(path, &[], None).await {
            Ok(response) => Ok(response),
            Err(Error::NotFound { .. }) => Ok(ClubMembership::failed()),
            Err(err @ Error::Unauthorized { .. }) => {
                if credential_still_valid(&self.transport).await {
                    Ok(ClubMembership::failed())
                } else {
                    Err(err)
                }
            }
            Err(err) => Err(err),
        }
    }
}
