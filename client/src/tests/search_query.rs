use crate::error::DeezerClientError;
use crate::routes::AdvancedQueryBuilder;

/// **VALUE**: Verifies the advanced query renders quoted criteria in the API's
/// search syntax.
#[test]
fn given_mixed_criteria_when_built_then_renders_search_syntax() {
    let query = AdvancedQueryBuilder::new()
        .artist("aloe blacc")
        .track("I need a dollar")
        .duration_min(300)
        .bpm_max(200)
        .build()
        .expect("query");

    assert_eq!(
        query,
        r#"artist:"aloe blacc" track:"I need a dollar" dur_min:300 bpm_max:200"#
    );
}

/// **VALUE**: Verifies a plain `q` criterion is quoted and leads the query.
#[test]
fn given_simple_query_when_built_then_quoted() {
    let query = AdvancedQueryBuilder::new()
        .q("good things")
        .album("good things")
        .build()
        .expect("query");

    assert_eq!(query, r#""good things" album:"good things""#);
}

/// **VALUE**: Verifies building with no criterion at all is rejected up front.
#[test]
fn given_no_criteria_when_built_then_invalid_argument() {
    let result = AdvancedQueryBuilder::new().build();

    assert!(matches!(
        result,
        Err(DeezerClientError::InvalidArgument { .. })
    ));
}

/// **VALUE**: Verifies blank criteria are skipped, and all-blank input is rejected
/// rather than producing an empty query string.
#[test]
fn given_blank_criteria_when_built_then_invalid_argument() {
    let result = AdvancedQueryBuilder::new().q("   ").artist("").build();

    match result {
        Err(DeezerClientError::InvalidArgument { message, .. }) => {
            assert!(message.contains("blank"));
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}
