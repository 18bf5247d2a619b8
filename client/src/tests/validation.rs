// Unit tests for the response validator, exercised directly on buffered
// bodies. The validator is a pure function, so every API failure shape can
// be covered without a server.

use crate::error::DeezerClientError;
use crate::validation::validate;

use reqwest::StatusCode;

const JSON: Option<&str> = Some("application/json; charset=utf-8");

/// **VALUE**: Verifies the API's boolean-body convention is caught under HTTP 200.
///
/// **WHY THIS MATTERS**: Deezer encodes certain failures (unsupported or
/// unauthorized queries) as a literal `true`/`false` with a successful status. If the
/// validator misses it, the typed decoder downstream reports a confusing mismatch
/// error instead of the real failure.
///
/// **BUG THIS CATCHES**: Would catch the boolean probe being dropped, or running
/// against non-JSON bodies where `false` could be a legitimate payload prefix.
#[test]
fn given_success_status_with_boolean_body_when_validated_then_boolean_body_error() {
    // GIVEN: HTTP 200 with a bare boolean
    // WHEN: Validating
    let result = validate(StatusCode::OK, JSON, b"false");

    // THEN: BooleanBody with the decoded value
    match result {
        Err(DeezerClientError::BooleanBody { value, .. }) => assert!(!value),
        other => panic!("expected BooleanBody, got {other:?}"),
    }

    match validate(StatusCode::OK, JSON, b"true") {
        Err(DeezerClientError::BooleanBody { value, .. }) => assert!(value),
        other => panic!("expected BooleanBody, got {other:?}"),
    }
}

/// **VALUE**: Verifies the error envelope is classified even under a successful
/// transport status.
///
/// **BUG THIS CATCHES**: Would catch a validator that only probes the envelope on
/// non-2xx statuses, letting `{"error":{...}}` reach typed decoding as if it were
/// data.
#[test]
fn given_success_status_with_error_envelope_when_validated_then_api_error() {
    // GIVEN: HTTP 200 carrying the error envelope
    let body = br#"{"error":{"type":"DataException","message":"no data","code":800}}"#;

    // WHEN: Validating
    let result = validate(StatusCode::OK, JSON, body);

    // THEN: Api with the envelope's code
    match result {
        Err(DeezerClientError::Api(api)) => {
            assert_eq!(api.code, Some(800));
            assert_eq!(api.message.as_deref(), Some("no data"));
        }
        other => panic!("expected Api, got {other:?}"),
    }
}

/// **VALUE**: Verifies the envelope probe runs before the boolean probe.
///
/// The two probes are mutually exclusive on real payloads, but the ordering is part
/// of the classification contract and must not silently flip.
#[test]
fn given_envelope_and_boolean_probes_when_body_is_ordinary_json_then_passes_through() {
    let body = br#"{"id": 3135556, "title": "Harder, Better, Faster, Stronger"}"#;
    assert!(validate(StatusCode::OK, JSON, body).is_ok());
}

/// **VALUE**: Verifies non-JSON success responses are never probed.
///
/// **BUG THIS CATCHES**: Would catch boolean probing of non-JSON bodies; a plain
/// text body reading "true" is not an API failure.
#[test]
fn given_success_status_without_json_content_type_when_validated_then_passes_through() {
    assert!(validate(StatusCode::OK, Some("text/plain"), b"true").is_ok());
    assert!(validate(StatusCode::OK, None, b"false").is_ok());
}

/// **VALUE**: Verifies 5xx statuses classify as ServerUnavailable before any body
/// probing.
#[test]
fn given_server_error_status_when_validated_then_server_unavailable() {
    let result = validate(
        StatusCode::SERVICE_UNAVAILABLE,
        Some("text/html"),
        b"<html>maintenance</html>",
    );

    match result {
        Err(DeezerClientError::ServerUnavailable { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected ServerUnavailable, got {other:?}"),
    }
}

/// **VALUE**: Verifies a non-2xx response still resolves the error envelope when one
/// is present.
#[test]
fn given_client_error_status_with_envelope_when_validated_then_api_error() {
    let body = br#"{"error":{"type":"ParameterException","message":"bad id","code":500}}"#;

    match validate(StatusCode::NOT_FOUND, JSON, body) {
        Err(DeezerClientError::Api(api)) => assert_eq!(api.code, Some(500)),
        other => panic!("expected Api, got {other:?}"),
    }
}

/// **VALUE**: Verifies a non-2xx response with an unrecognizable body becomes
/// Unclassified, keeping the probe failure as the cause.
///
/// **WHY THIS MATTERS**: The probe failure must never leak as a raw decode error of
/// the wrong kind - Unclassified is the contract for "we could not say more".
#[test]
fn given_client_error_status_with_garbage_body_when_validated_then_unclassified() {
    let result = validate(StatusCode::NOT_FOUND, JSON, b"<html>not json</html>");

    match result {
        Err(DeezerClientError::Unclassified { source, .. }) => {
            assert!(source.is_some(), "probe failure should ride along as cause");
        }
        other => panic!("expected Unclassified, got {other:?}"),
    }
}

/// **VALUE**: Verifies an empty JSON body passes through; the typed decoder owns
/// that failure, not the validator.
#[test]
fn given_success_status_with_empty_body_when_validated_then_passes_through() {
    assert!(validate(StatusCode::OK, JSON, b"").is_ok());
}
