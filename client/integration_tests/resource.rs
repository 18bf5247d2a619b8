use crate::helpers::{TRACK_123, json_body};

use deezer_client::{DeezerApiClient, Resource};
use deezer_models::{Album, Track};

use serial_test::serial;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer};

/// **VALUE**: Verifies reload fetches a fresh, fully populated instance by id and
/// leaves the stale original untouched.
///
/// **WHY THIS MATTERS**: Reload's contract is replace-not-merge. Callers keep the
/// returned value; mutating or merging into the original would hide partial-data
/// bugs.
#[tokio::test]
#[serial]
async fn given_partial_track_when_reloaded_then_fresh_instance_returned() {
    // GIVEN: A stub serving the full track and a partial local copy
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/track/123"))
        .respond_with(json_body(TRACK_123))
        .expect(1)
        .mount(&server)
        .await;
    let client = DeezerApiClient::with_base_url(&server.uri()).expect("client");

    let stale = Track {
        id: 123,
        title: String::new(),
        kind: "track".to_string(),
        ..Default::default()
    };

    // WHEN: Reloading
    let fresh = stale.reload(&client).await.expect("reload");

    // THEN: New instance is populated; the stale one is unchanged
    assert_eq!(fresh.id, 123);
    assert_eq!(fresh.title, "Aerodynamic");
    assert_eq!(fresh.artist.as_ref().map(|a| a.id), Some(27));
    assert!(stale.title.is_empty());
}

/// **VALUE**: Verifies the type-keyed dispatch: each entity reloads against its own
/// endpoint segment.
///
/// **BUG THIS CATCHES**: Would catch an `ENDPOINT` constant pasted onto the wrong
/// entity, which would 404 (or worse, decode a sibling type) in production.
#[tokio::test]
#[serial]
async fn given_album_when_reloaded_then_album_endpoint_used() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/album/302127"))
        .respond_with(json_body(r#"{"id": 302127, "title": "Discovery"}"#))
        .expect(1)
        .mount(&server)
        .await;
    let client = DeezerApiClient::with_base_url(&server.uri()).expect("client");

    let stale = Album {
        id: 302127,
        ..Default::default()
    };

    let fresh = stale.reload(&client).await.expect("reload");

    assert_eq!(fresh.title, "Discovery");
    assert_eq!(fresh.resource_type(), "album");
}

/// **VALUE**: Verifies reload failures surface classified, here the data-not-found
/// envelope the API returns for unknown ids.
#[tokio::test]
#[serial]
async fn given_unknown_id_when_reloaded_then_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/track/999"))
        .respond_with(json_body(
            r#"{"error":{"type":"DataException","message":"no data","code":800}}"#,
        ))
        .mount(&server)
        .await;
    let client = DeezerApiClient::with_base_url(&server.uri()).expect("client");

    let stale = Track {
        id: 999,
        ..Default::default()
    };

    let result = stale.reload(&client).await;

    match result {
        Err(deezer_client::DeezerClientError::Api(api)) => assert_eq!(api.code, Some(800)),
        other => panic!("expected Api, got {other:?}"),
    }
}
