//! Athlete Service Tests
//!
//! Covers the authenticated-athlete probe, profile recovery, and the
//! statistics endpoint's degradation for missing or private athletes.

mod common;

use anyhow::Result;
use serde_json::json;
use strava_client::errors::Error;
use strava_client::models::ResourceState;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::client_for;

#[tokio::test]
async fn authenticated_athlete_is_fetched_directly() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/athlete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 9,
            "resource_state": 3,
            "firstname": "Jo",
            "lastname": "Rider"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, "athlete-token-1", false);
    let athlete = client.athletes().get_authenticated_athlete().await?;

    assert_eq!(athlete.id, 9);
    assert_eq!(athlete.firstname.as_deref(), Some("Jo"));
    Ok(())
}

#[tokio::test]
async fn authenticated_athlete_surfaces_unauthorized_directly() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/athlete"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server, "athlete-token-2", false);
    let result = client.athletes().get_authenticated_athlete().await;

    assert!(matches!(result, Err(Error::Unauthorized { .. })));
    Ok(())
}

#[tokio::test]
async fn private_profile_becomes_a_meta_placeholder() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/athletes/77"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/athlete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 9 })))
        .mount(&server)
        .await;

    let client = client_for(&server, "athlete-token-3", false);
    let athlete = client.athletes().get_athlete(77).await?.expect("placeholder");

    assert_eq!(athlete.id, 77);
    assert_eq!(athlete.resource_state, Some(ResourceState::Meta));
    Ok(())
}

#[tokio::test]
async fn statistics_of_a_missing_athlete_are_none() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/athletes/404/stats"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server, "athlete-token-4", false);
    assert!(client.athletes().athlete_statistics(404).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn statistics_decode_the_totals() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/athletes/9/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "biggest_ride_distance": 120_000.0,
            "all_ride_totals": {
                "count": 250,
                "distance": 1_500_000.0,
                "moving_time": 540_000,
                "elapsed_time": 560_000,
                "elevation_gain": 25_000.0
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, "athlete-token-5", false);
    let stats = client
        .athletes()
        .athlete_statistics(9)
        .await?
        .expect("stats exist");

    let rides = stats.all_ride_totals.expect("ride totals");
    assert_eq!(rides.count, 250);
    assert!((stats.biggest_ride_distance.unwrap_or_default() - 120_000.0).abs() < f64::EPSILON);
    Ok(())
}
