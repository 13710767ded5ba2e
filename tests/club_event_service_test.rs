//! Club Group Event Service Tests
//!
//! Covers event lookup recovery, RSVP join/leave with the write-scope
//! precheck, and joined-athlete listings.

mod common;

use anyhow::Result;
use serde_json::json;
use strava_client::errors::Error;
use strava_client::models::ResourceState;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, client_with_paging, tiny_pages};

#[tokio::test]
async fn missing_event_is_none() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/group_events/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server, "event-token-1", false);
    assert!(client.club_events().get_event(404).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn event_of_a_private_club_becomes_a_meta_placeholder() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/group_events/12"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/athlete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
        .mount(&server)
        .await;

    let client = client_for(&server, "event-token-2", false);
    let event = client.club_events().get_event(12).await?.expect("placeholder");

    assert_eq!(event.id, 12);
    assert_eq!(event.resource_state, Some(ResourceState::Meta));
    Ok(())
}

#[tokio::test]
async fn joining_an_event_rsvps_the_upcoming_occurrence() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/group_events/12/rsvps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "joined": true })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "event-token-3", true);
    let response = client.club_events().join_event(12).await?;

    assert!(response.joined);
    Ok(())
}

#[tokio::test]
async fn event_rsvps_require_write_scope_before_any_round_trip() -> Result<()> {
    let server = MockServer::start().await;
    let client = client_for(&server, "event-token-4", false);

    let join = client.club_events().join_event(12).await;
    let leave = client.club_events().leave_event(12).await;

    assert!(matches!(join, Err(Error::WriteAccessRequired { .. })));
    assert!(matches!(leave, Err(Error::WriteAccessRequired { .. })));
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
    Ok(())
}

#[tokio::test]
async fn joined_athletes_are_collected_across_pages() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/group_events/12/athletes"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "resource_state": 2 },
            { "id": 2, "resource_state": 2 }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/group_events/12/athletes"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 3, "resource_state": 2 }
        ])))
        .mount(&server)
        .await;

    let client = client_with_paging(&server, "event-token-5", false, tiny_pages());
    let athletes = client.club_events().list_all_event_joined_athletes(12).await?;

    let ids: Vec<i64> = athletes
        .expect("event exists")
        .iter()
        .map(|athlete| athlete.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    Ok(())
}

#[tokio::test]
async fn joined_athletes_of_a_missing_event_are_none() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/group_events/404/athletes"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server, "event-token-6", false);
    let athletes = client
        .club_events()
        .list_event_joined_athletes(404, None)
        .await?;

    assert!(athletes.is_none());
    Ok(())
}
