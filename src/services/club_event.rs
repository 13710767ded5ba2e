// ABOUTME: Club group event operations: lookup, join/leave, and joined-athlete listings
// ABOUTME: Only club members can reach private events; inaccessible events degrade gracefully
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use strava_core::errors::Result;
use strava_core::models::{Athlete, ClubEvent, EventJoinResponse};
use strava_core::paging::{Paging, PagingConfig};

use crate::pagination::{fetch_all, fetch_page};
use crate::recovery::{recover_list, recover_resource, require_write_scope};
use crate::services::paging_query;
use crate::transport::Transport;

/// Recurring club group event operations.
pub struct ClubGroupEventService {
    transport: Arc<Transport>,
    paging: PagingConfig,
}

impl ClubGroupEventService {
    pub(crate) const fn new(transport: Arc<Transport>, paging: PagingConfig) -> Self {
        Self { transport, paging }
    }

    /// Fetch a single group event.
    ///
    /// Returns `None` when the event does not exist and a meta placeholder
    /// when its club is private.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential itself no longer authenticates.
    pub async fn get_event(&self, id: i64) -> Result<Option<ClubEvent>> {
        match self.transport.get(&format!("/group_events/{id}"), &[]).await {
            Ok(event) => Ok(Some(event)),
            Err(err) => recover_resource(err, &self.transport, id).await,
        }
    }

    /// Join the upcoming occurrence of a group event.
    ///
    /// # Errors
    ///
    /// `WriteAccessRequired` without write scope (checked before any network
    /// call); `NotFound` when the event does not exist.
    pub async fn join_event(&self, id: i64) -> Result<EventJoinResponse> {
        require_write_scope(self.transport.token(), "join a group event")?;
        self.transport
            .post::<(), EventJoinResponse>(&format!("/group_events/{id}/rsvps"), &[], None)
            .await
    }

    /// Leave the upcoming occurrence of a group event.
    ///
    /// # Errors
    ///
    /// `WriteAccessRequired` without write scope (checked before any network
    /// call); `NotFound` when the event does not exist.
    pub async fn leave_event(&self, id: i64) -> Result<()> {
        require_write_scope(self.transport.token(), "leave a group event")?;
        self.transport
            .delete_no_content(&format!("/group_events/{id}/rsvps"))
            .await
    }

    /// List the athletes joined to a group event inside one paging window.
    ///
    /// Athletes the authenticated athlete follows come first, per the
    /// provider's ordering. Returns `None` when the event does not exist, the
    /// empty list when it belongs to a private club.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential no longer authenticates.
    pub async fn list_event_joined_athletes(
        &self,
        event_id: i64,
        paging: Option<Paging>,
    ) -> Result<Option<Vec<Athlete>>> {
        let listed = fetch_page(&self.paging, paging, |page| {
            self.joined_athletes_page(event_id, page)
        })
        .await;
        match listed {
            Ok(athletes) => Ok(Some(athletes)),
            Err(err) => recover_list(err, &self.transport).await,
        }
    }

    /// List every athlete joined to a group event.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential no longer authenticates.
    pub async fn list_all_event_joined_athletes(
        &self,
        event_id: i64,
    ) -> Result<Option<Vec<Athlete>>> {
        let listed = fetch_all(&self.paging, |page| {
            self.joined_athletes_page(event_id, page)
        })
        .await;
        match listed {
            Ok(athletes) => Ok(Some(athletes)),
            Err(err) => recover_list(err, &self.transport).await,
        }
    }

    async fn joined_athletes_page(&self, event_id: i64, page: Paging) -> Result<Vec<Athlete>> {
        self.transport
            .get(
                &format!("/group_events/{event_id}/athletes"),
                &paging_query(page),
            )
            .await
    }
}
