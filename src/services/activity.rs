// ABOUTME: Activity operations: fetch, create, update, delete, and listings
// ABOUTME: Hosts the commute two-phase update and the meta-state normalization adapters
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use strava_core::errors::{Error, Result};
use strava_core::models::{
    Activity, ActivityUpdate, ActivityZone, Athlete, Comment, Lap, NewActivity, Photo,
    ResourceState, ResourceStateful,
};
use strava_core::paging::{Paging, PagingConfig};

use crate::pagination::{fetch_all, fetch_page};
use crate::poller::poll_until_stable;
use crate::recovery::{caller_data_rejected, recover_list, recover_resource, require_write_scope};
use crate::services::paging_query;
use crate::transport::Transport;

/// Activity operations.
pub struct ActivityService {
    transport: Arc<Transport>,
    paging: PagingConfig,
}

impl ActivityService {
    pub(crate) const fn new(transport: Arc<Transport>, paging: PagingConfig) -> Self {
        Self { transport, paging }
    }

    /// Fetch a single activity.
    ///
    /// Waits out the `Updating` state through the poller, then normalizes the
    /// resource states Strava omits on embedded segment-effort references.
    /// Returns `None` when the activity does not exist and a meta placeholder
    /// when it exists but is private.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential itself no longer authenticates;
    /// `UnknownApi` on unexpected provider behavior.
    pub async fn get_activity(
        &self,
        id: i64,
        include_all_efforts: bool,
    ) -> Result<Option<Activity>> {
        let fetched =
            poll_until_stable(|| self.fetch_activity(id, include_all_efforts)).await;
        match fetched {
            Ok(mut activity) => {
                default_effort_states(&mut activity);
                Ok(Some(activity))
            }
            Err(err) => recover_resource(err, &self.transport, id).await,
        }
    }

    async fn fetch_activity(&self, id: i64, include_all_efforts: bool) -> Result<Activity> {
        self.transport
            .get(
                &format!("/activities/{id}"),
                &[("include_all_efforts", include_all_efforts.to_string())],
            )
            .await
    }

    /// Create a manual activity.
    ///
    /// # Errors
    ///
    /// `WriteAccessRequired` when the token has no write scope (checked
    /// before any network call); `InvalidArgument` when the provider rejects
    /// the submitted data.
    pub async fn create_activity(&self, activity: &NewActivity) -> Result<Activity> {
        require_write_scope(self.transport.token(), "create an activity")?;
        self.transport
            .post("/activities", &[], Some(activity))
            .await
            .map_err(caller_data_rejected)
    }

    /// Update an activity, returning `None` when it does not exist.
    ///
    /// Strava does not reliably apply the commute flag when it is submitted
    /// together with other fields, so a present commute flag is submitted on
    /// its own first and the echoed value verified before the remaining
    /// fields go out in a second request.
    ///
    /// # Errors
    ///
    /// `WriteAccessRequired` without write scope; `UnknownApi` when the
    /// provider fails to echo the commute flag it accepted.
    pub async fn update_activity(
        &self,
        id: i64,
        update: &ActivityUpdate,
    ) -> Result<Option<Activity>> {
        require_write_scope(self.transport.token(), "update an activity")?;

        let mut remaining = update.clone();
        if let Some(commute) = remaining.commute {
            debug!(id, commute, "submitting commute flag separately");
            let commute_only = ActivityUpdate {
                commute: Some(commute),
                ..ActivityUpdate::default()
            };
            let Some(echoed) = self.apply_update(id, &commute_only).await? else {
                return Ok(None);
            };
            if echoed.commute != Some(commute) {
                return Err(Error::UnknownApi {
                    status: None,
                    message: format!("provider failed to apply the commute flag on activity {id}"),
                });
            }
            remaining.commute = None;
        }

        self.apply_update(id, &remaining).await
    }

    async fn apply_update(&self, id: i64, update: &ActivityUpdate) -> Result<Option<Activity>> {
        match self
            .transport
            .put::<_, Activity>(&format!("/activities/{id}"), update)
            .await
        {
            // The echo can itself be mid-update; resolve it through the poller.
            Ok(activity) if activity.resource_state() == ResourceState::Updating => {
                self.get_activity(id, false).await
            }
            Ok(activity) => Ok(Some(activity)),
            Err(Error::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Delete an activity, returning the deleted record or `None` when it
    /// does not exist.
    ///
    /// # Errors
    ///
    /// `WriteAccessRequired` without write scope.
    pub async fn delete_activity(&self, id: i64) -> Result<Option<Activity>> {
        require_write_scope(self.transport.token(), "delete an activity")?;
        match self
            .transport
            .delete::<Activity>(&format!("/activities/{id}"))
            .await
        {
            Ok(activity) => Ok(Some(activity)),
            Err(Error::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// List the authenticated athlete's activities inside one paging window.
    ///
    /// `before`/`after` bound the activities' start times.
    ///
    /// # Errors
    ///
    /// Transport failures pass through unchanged.
    pub async fn list_activities(
        &self,
        before: Option<DateTime<Utc>>,
        after: Option<DateTime<Utc>>,
        paging: Option<Paging>,
    ) -> Result<Vec<Activity>> {
        let before = before.map(|t| t.timestamp());
        let after = after.map(|t| t.timestamp());
        fetch_page(&self.paging, paging, |page| {
            self.activities_page(before, after, page)
        })
        .await
    }

    /// List every one of the authenticated athlete's activities.
    ///
    /// # Errors
    ///
    /// Transport failures pass through unchanged.
    pub async fn list_all_activities(
        &self,
        before: Option<DateTime<Utc>>,
        after: Option<DateTime<Utc>>,
    ) -> Result<Vec<Activity>> {
        let before = before.map(|t| t.timestamp());
        let after = after.map(|t| t.timestamp());
        fetch_all(&self.paging, |page| {
            self.activities_page(before, after, page)
        })
        .await
    }

    async fn activities_page(
        &self,
        before: Option<i64>,
        after: Option<i64>,
        page: Paging,
    ) -> Result<Vec<Activity>> {
        let mut query: Vec<(&'static str, String)> = paging_query(page).into();
        if let Some(before) = before {
            query.push(("before", before.to_string()));
        }
        if let Some(after) = after {
            query.push(("after", after.to_string()));
        }
        self.transport.get("/athlete/activities", &query).await
    }

    /// List activities recently performed by athletes the authenticated
    /// athlete follows.
    ///
    /// # Errors
    ///
    /// Transport failures pass through unchanged.
    pub async fn list_friends_activities(&self, paging: Option<Paging>) -> Result<Vec<Activity>> {
        fetch_page(&self.paging, paging, |page| self.friends_page(page)).await
    }

    /// List the full recent-friend-activity feed.
    ///
    /// # Errors
    ///
    /// Transport failures pass through unchanged.
    pub async fn list_all_friends_activities(&self) -> Result<Vec<Activity>> {
        fetch_all(&self.paging, |page| self.friends_page(page)).await
    }

    async fn friends_page(&self, page: Paging) -> Result<Vec<Activity>> {
        self.transport
            .get("/activities/following", &paging_query(page))
            .await
    }

    /// List activities done alongside the given one.
    ///
    /// Returns `None` when the activity does not exist, the empty list when
    /// it is private.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential no longer authenticates.
    pub async fn list_related_activities(
        &self,
        id: i64,
        paging: Option<Paging>,
    ) -> Result<Option<Vec<Activity>>> {
        let listed = fetch_page(&self.paging, paging, |page| {
            self.related_page(id, page)
        })
        .await;
        match listed {
            Ok(activities) => Ok(Some(activities)),
            Err(err) => recover_list(err, &self.transport).await,
        }
    }

    /// List every activity done alongside the given one.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential no longer authenticates.
    pub async fn list_all_related_activities(&self, id: i64) -> Result<Option<Vec<Activity>>> {
        let listed = fetch_all(&self.paging, |page| self.related_page(id, page)).await;
        match listed {
            Ok(activities) => Ok(Some(activities)),
            Err(err) => recover_list(err, &self.transport).await,
        }
    }

    async fn related_page(&self, id: i64, page: Paging) -> Result<Vec<Activity>> {
        self.transport
            .get(&format!("/activities/{id}/related"), &paging_query(page))
            .await
    }

    /// List the heart-rate and power zones of an activity.
    ///
    /// Returns `None` when the activity does not exist, the empty list when
    /// it is private.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential no longer authenticates.
    pub async fn list_activity_zones(&self, id: i64) -> Result<Option<Vec<ActivityZone>>> {
        match self
            .transport
            .get(&format!("/activities/{id}/zones"), &[])
            .await
        {
            Ok(zones) => Ok(Some(zones)),
            Err(err) => recover_list(err, &self.transport).await,
        }
    }

    /// List the laps of an activity.
    ///
    /// Returns `None` when the activity does not exist, the empty list when
    /// it is private. Lap records are normalized for the provider's missing
    /// nested states and missing power-meter flag.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential no longer authenticates.
    pub async fn list_activity_laps(&self, id: i64) -> Result<Option<Vec<Lap>>> {
        match self
            .transport
            .get::<Vec<Lap>>(&format!("/activities/{id}/laps"), &[])
            .await
        {
            Ok(mut laps) => {
                for lap in &mut laps {
                    normalize_lap(lap);
                }
                Ok(Some(laps))
            }
            Err(err) => recover_list(err, &self.transport).await,
        }
    }

    /// List the photos attached to an activity.
    ///
    /// Returns `None` when the activity does not exist, the empty list when
    /// it is private or has no photos.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential no longer authenticates.
    pub async fn list_activity_photos(&self, id: i64) -> Result<Option<Vec<Photo>>> {
        // Strava answers null rather than an empty array when there are no
        // photos; decode through Option and flatten.
        match self
            .transport
            .get::<Option<Vec<Photo>>>(&format!("/activities/{id}/photos"), &[])
            .await
        {
            Ok(photos) => Ok(Some(photos.unwrap_or_default())),
            Err(err) => recover_list(err, &self.transport).await,
        }
    }

    /// List the comments on an activity inside one paging window.
    ///
    /// Returns `None` when the activity does not exist, the empty list when
    /// it is private.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential no longer authenticates.
    pub async fn list_activity_comments(
        &self,
        id: i64,
        markdown: bool,
        paging: Option<Paging>,
    ) -> Result<Option<Vec<Comment>>> {
        let listed = fetch_page(&self.paging, paging, |page| {
            self.comments_page(id, markdown, page)
        })
        .await;
        match listed {
            Ok(comments) => Ok(Some(comments)),
            Err(err) => recover_list(err, &self.transport).await,
        }
    }

    /// List every comment on an activity.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential no longer authenticates.
    pub async fn list_all_activity_comments(&self, id: i64) -> Result<Option<Vec<Comment>>> {
        let listed = fetch_all(&self.paging, |page| self.comments_page(id, false, page)).await;
        match listed {
            Ok(comments) => Ok(Some(comments)),
            Err(err) => recover_list(err, &self.transport).await,
        }
    }

    async fn comments_page(&self, id: i64, markdown: bool, page: Paging) -> Result<Vec<Comment>> {
        let mut query: Vec<(&'static str, String)> = paging_query(page).into();
        query.push(("markdown", markdown.to_string()));
        self.transport
            .get(&format!("/activities/{id}/comments"), &query)
            .await
    }

    /// List the athletes who gave kudos on an activity inside one paging
    /// window.
    ///
    /// Returns `None` when the activity does not exist, the empty list when
    /// it is private.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential no longer authenticates.
    pub async fn list_activity_kudoers(
        &self,
        id: i64,
        paging: Option<Paging>,
    ) -> Result<Option<Vec<Athlete>>> {
        let listed = fetch_page(&self.paging, paging, |page| self.kudoers_page(id, page)).await;
        match listed {
            Ok(athletes) => Ok(Some(athletes)),
            Err(err) => recover_list(err, &self.transport).await,
        }
    }

    /// List every athlete who gave kudos on an activity.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the credential no longer authenticates.
    pub async fn list_all_activity_kudoers(&self, id: i64) -> Result<Option<Vec<Athlete>>> {
        let listed = fetch_all(&self.paging, |page| self.kudoers_page(id, page)).await;
        match listed {
            Ok(athletes) => Ok(Some(athletes)),
            Err(err) => recover_list(err, &self.transport).await,
        }
    }

    async fn kudoers_page(&self, id: i64, page: Paging) -> Result<Vec<Athlete>> {
        self.transport
            .get(&format!("/activities/{id}/kudos"), &paging_query(page))
            .await
    }

    /// Comment on an activity.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for empty text; `WriteAccessRequired` without write
    /// scope (checked before any network call).
    pub async fn create_comment(&self, activity_id: i64, text: &str) -> Result<Comment> {
        if text.trim().is_empty() {
            return Err(Error::InvalidArgument {
                message: "comment text must not be empty".to_owned(),
            });
        }
        require_write_scope(self.transport.token(), "post a comment")?;
        self.transport
            .post::<(), Comment>(
                &format!("/activities/{activity_id}/comments"),
                &[("text", text.to_owned())],
                None,
            )
            .await
            .map_err(caller_data_rejected)
    }

    /// Delete a comment.
    ///
    /// # Errors
    ///
    /// `WriteAccessRequired` without write scope; `NotFound` when the comment
    /// does not exist.
    pub async fn delete_comment(&self, activity_id: i64, comment_id: i64) -> Result<()> {
        require_write_scope(self.transport.token(), "delete a comment")?;
        self.transport
            .delete_no_content(&format!("/activities/{activity_id}/comments/{comment_id}"))
            .await
    }

    /// Give kudos on an activity on behalf of the authenticated athlete.
    ///
    /// # Errors
    ///
    /// `WriteAccessRequired` without write scope (checked before any network
    /// call); `NotFound` when the activity does not exist.
    pub async fn give_kudos(&self, activity_id: i64) -> Result<()> {
        require_write_scope(self.transport.token(), "give kudos")?;
        self.transport
            .post_no_content(&format!("/activities/{activity_id}/kudos"), &[])
            .await
    }
}

/// Default the resource states Strava omits on segment-effort references.
fn default_effort_states(activity: &mut Activity) {
    if let Some(efforts) = activity.segment_efforts.as_mut() {
        for effort in efforts {
            if let Some(nested) = effort.activity.as_mut() {
                nested.resource_state.get_or_insert(ResourceState::Meta);
            }
            if let Some(athlete) = effort.athlete.as_mut() {
                athlete.resource_state.get_or_insert(ResourceState::Meta);
            }
        }
    }
}

/// Default the states and power-meter flag Strava omits on lap records.
fn normalize_lap(lap: &mut Lap) {
    if let Some(nested) = lap.activity.as_mut() {
        nested.resource_state.get_or_insert(ResourceState::Meta);
    }
    if let Some(athlete) = lap.athlete.as_mut() {
        athlete.resource_state.get_or_insert(ResourceState::Meta);
    }
    if lap.average_watts.is_some() && lap.device_watts.is_none() {
        lap.device_watts = Some(false);
    }
}
