use crate::helpers::json_body;

use deezer_client::DeezerApiClient;
use deezer_models::SearchOrder;

use serial_test::serial;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer};

async fn client_for(server: &MockServer) -> DeezerApiClient {
    DeezerApiClient::with_base_url(&server.uri()).expect("client")
}

/// **VALUE**: Verifies the search route renders its query parameters the way the
/// API expects: `strict=on` only when requested, order by enum name, window only
/// when present.
#[tokio::test]
#[serial]
async fn given_search_parameters_when_searching_then_query_string_matches_api_contract() {
    // GIVEN: A stub asserting the exact query shape
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/artist"))
        .and(query_param("q", "daft punk"))
        .and(query_param("strict", "on"))
        .and(query_param("order", "RATING_DESC"))
        .and(query_param("index", "25"))
        .and(query_param_is_missing("limit"))
        .respond_with(json_body(
            r#"{"data": [{"id": 27, "name": "Daft Punk"}], "total": 1}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    // WHEN: Searching with strict on, an order, and only an index
    let result = client
        .searches()
        .search_artist("daft punk", true, Some(SearchOrder::RatingDesc), Some(25), None)
        .await
        .expect("search");

    // THEN: The page decoded
    assert_eq!(result.total, Some(1));
    assert_eq!(result.data[0].name, "Daft Punk");
}

/// **VALUE**: Verifies `strict=false` leaves the parameter off entirely; the API
/// treats any value other than "on" as noise.
#[tokio::test]
#[serial]
async fn given_fuzzy_search_when_searching_then_strict_parameter_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "one more time"))
        .and(query_param_is_missing("strict"))
        .and(query_param_is_missing("order"))
        .respond_with(json_body(r#"{"data": []}"#))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let result = client
        .searches()
        .search("one more time", false, None, None, None)
        .await
        .expect("search");

    assert!(result.data.is_empty());
}

/// **VALUE**: Verifies the composite chart decodes all five windows and preserves
/// the documented `total = 0` inconsistency instead of "fixing" it.
#[tokio::test]
#[serial]
async fn given_chart_endpoint_when_get_all_then_composite_windows_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chart"))
        .respond_with(json_body(
            r#"{
                "tracks": {"data": [{"id": 1, "title": "a"}], "total": 0},
                "albums": {"data": [], "total": 100},
                "artists": {"data": []},
                "playlists": {"data": []},
                "podcasts": {"data": []}
            }"#,
        ))
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let chart = client.charts().get_all(None, None).await.expect("chart");

    assert_eq!(chart.tracks.data.len(), 1);
    assert_eq!(chart.tracks.total, Some(0));
    assert_eq!(chart.albums.total, Some(100));
}

/// **VALUE**: Verifies the window helper appends `index`/`limit` to sub-resource
/// paths.
#[tokio::test]
#[serial]
async fn given_window_parameters_when_get_album_tracks_then_appended_to_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/album/302127/tracks"))
        .and(query_param("index", "50"))
        .and(query_param("limit", "25"))
        .respond_with(json_body(r#"{"data": [], "total": 14}"#))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let page = client
        .albums()
        .get_tracks(302127, Some(50), Some(25))
        .await
        .expect("tracks");

    assert_eq!(page.total, Some(14));
}

/// **VALUE**: Verifies the id-escaped route shapes (`track/isrc:...`,
/// `album/upc:...`) hit the right paths.
#[tokio::test]
#[serial]
async fn given_isrc_and_upc_lookups_when_fetched_then_prefixed_paths_used() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/track/isrc:GBDUW0000059"))
        .respond_with(json_body(r#"{"id": 1, "title": "t"}"#))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/album/upc:724384960650"))
        .respond_with(json_body(r#"{"id": 2, "title": "a"}"#))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let track = client
        .tracks()
        .get_by_isrc("GBDUW0000059")
        .await
        .expect("track");
    let album = client
        .albums()
        .get_by_upc("724384960650")
        .await
        .expect("album");

    assert_eq!(track.id, 1);
    assert_eq!(album.id, 2);
}
