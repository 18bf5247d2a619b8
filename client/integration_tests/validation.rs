use crate::helpers::json_body;

use deezer_client::{DeezerApiClient, DeezerClientError};

use std::time::Duration;

use serial_test::serial;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> DeezerApiClient {
    DeezerApiClient::with_base_url(&server.uri()).expect("client")
}

/// **VALUE**: Verifies a 200 response with body `false` classifies as BooleanBody
/// end to end, through a real transport and a real route.
///
/// **WHY THIS MATTERS**: This is the API's signature quirk. The literal boolean must
/// be intercepted before typed decoding ever sees the buffer.
#[tokio::test]
#[serial]
async fn given_stub_returning_false_when_get_track_then_boolean_body_error() {
    // GIVEN: A stub answering HTTP 200 with `false`
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/track/1"))
        .respond_with(json_body("false"))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    // WHEN: Fetching through a typed route
    let result = client.tracks().get_by_id(1).await;

    // THEN: BooleanBody, not a decode error
    match result {
        Err(DeezerClientError::BooleanBody { value, .. }) => assert!(!value),
        other => panic!("expected BooleanBody, got {other:?}"),
    }
}

/// **VALUE**: Verifies the error envelope under HTTP 200 surfaces as an Api error
/// with the resolved catalog code.
#[tokio::test]
#[serial]
async fn given_stub_returning_envelope_under_200_when_get_track_then_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/track/0"))
        .respond_with(json_body(
            r#"{"error":{"type":"DataException","message":"no data","code":800}}"#,
        ))
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let result = client.tracks().get_by_id(0).await;

    match result {
        Err(DeezerClientError::Api(api)) => {
            assert_eq!(api.code, Some(800));
            assert!(api.to_string().contains("Data not found"));
        }
        other => panic!("expected Api, got {other:?}"),
    }
}

/// **VALUE**: Verifies a real 4xx whose body is not the envelope classifies as
/// Unclassified instead of leaking a raw decode failure.
#[tokio::test]
#[serial]
async fn given_stub_returning_404_html_when_get_track_then_unclassified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/track/1"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>gone</html>"))
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let result = client.tracks().get_by_id(1).await;

    assert!(matches!(
        result,
        Err(DeezerClientError::Unclassified { .. })
    ));
}

/// **VALUE**: Verifies 5xx classifies as ServerUnavailable with the status kept.
#[tokio::test]
#[serial]
async fn given_stub_returning_503_when_get_track_then_server_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/track/1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let result = client.tracks().get_by_id(1).await;

    match result {
        Err(DeezerClientError::ServerUnavailable { status, message, .. }) => {
            assert_eq!(status, 503);
            assert!(message.contains("maintenance"));
        }
        other => panic!("expected ServerUnavailable, got {other:?}"),
    }
}

/// **VALUE**: Verifies a transport-level timeout classifies as NetworkTimeout, no
/// matter what the response would have been.
///
/// **BUG THIS CATCHES**: Would catch timeouts falling into the Unclassified bucket,
/// which callers cannot distinguish from programming errors.
#[tokio::test]
#[serial]
async fn given_slow_stub_when_request_times_out_then_network_timeout() {
    // GIVEN: A stub slower than the client's timeout
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/track/1"))
        .respond_with(json_body("{}").set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .expect("transport");
    let client =
        DeezerApiClient::from_http_client(http, &server.uri()).expect("client");

    // WHEN: Fetching
    let result = client.tracks().get_by_id(1).await;

    // THEN: NetworkTimeout
    assert!(matches!(
        result,
        Err(DeezerClientError::NetworkTimeout { .. })
    ));
}

/// **VALUE**: Verifies a valid body passing validation decodes normally, and a
/// pass-through body that does not match the requested type surfaces as Decode.
#[tokio::test]
#[serial]
async fn given_stub_returning_mismatched_json_when_get_track_then_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/track/1"))
        .respond_with(json_body(r#"[1, 2, 3]"#))
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let result = client.tracks().get_by_id(1).await;

    assert!(matches!(result, Err(DeezerClientError::Decode { .. })));
}
