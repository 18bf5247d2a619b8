// The registry is process-global state, so everything here is serialized,
// including against the client-constructing tests in other modules.

use crate::client::DeezerApiClient;
use crate::error::DeezerClientError;
use crate::registry::GlobalApiClient;

use serial_test::serial;

fn local_client(port: u16) -> DeezerApiClient {
    DeezerApiClient::with_base_url(&format!("http://127.0.0.1:{port}")).expect("client")
}

/// **VALUE**: Verifies `require_instance` fails deterministically with the named
/// configuration error after a reset and before any client exists.
///
/// **WHY THIS MATTERS**: The registry is the implicit fallback for `*_global`
/// reloads and continuations; an unset slot must produce a clear configuration
/// error, not a panic or a stale client.
#[test]
#[serial]
fn given_reset_registry_when_require_instance_then_configuration_error() {
    // GIVEN: An empty slot
    GlobalApiClient::reset();

    // WHEN: Requiring the instance
    let result = GlobalApiClient::require_instance();

    // THEN: Configuration error naming the missing initialization
    match result {
        Err(DeezerClientError::Configuration { message, .. }) => {
            assert!(message.contains("not initialized"));
        }
        other => panic!("expected Configuration error, got {other:?}"),
    }
    assert!(!GlobalApiClient::is_initialized());
}

/// **VALUE**: Verifies the first constructed client fills the slot and an active
/// occupant is never displaced.
#[test]
#[serial]
fn given_active_occupant_when_second_client_constructed_then_slot_unchanged() {
    GlobalApiClient::reset();

    // GIVEN: A first client holding the slot
    let first = local_client(9001);
    assert!(GlobalApiClient::is_initialized());

    // WHEN: A second client is constructed while the first is active
    let _second = local_client(9002);

    // THEN: The slot still holds the first client
    let held = GlobalApiClient::require_instance().expect("registered client");
    assert_eq!(held.base_url(), first.base_url());

    GlobalApiClient::reset();
}

/// **VALUE**: Verifies a closed occupant is replaced by the next construction.
///
/// **BUG THIS CATCHES**: Would catch `init_if_needed` only checking for an empty
/// slot, which would pin a dead client as the global fallback forever.
#[test]
#[serial]
fn given_closed_occupant_when_client_constructed_then_slot_replaced() {
    GlobalApiClient::reset();

    // GIVEN: A registered client that has been closed
    let first = local_client(9001);
    first.close();
    assert!(!first.is_active());

    // WHEN: Constructing a new client
    let second = local_client(9002);

    // THEN: The slot now holds the new one
    let held = GlobalApiClient::require_instance().expect("registered client");
    assert_eq!(held.base_url(), second.base_url());

    GlobalApiClient::reset();
}

/// **VALUE**: Verifies `reset_if` only clears when the predicate says so.
#[test]
#[serial]
fn given_predicate_when_reset_if_then_clears_conditionally() {
    GlobalApiClient::reset();
    let _client = local_client(9001);

    GlobalApiClient::reset_if(|| false);
    assert!(GlobalApiClient::is_initialized());

    GlobalApiClient::reset_if(|| true);
    assert!(!GlobalApiClient::is_initialized());
}
