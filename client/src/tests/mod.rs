// Unit tests for the client crate. Anything that needs a live HTTP stub
// lives in integration_tests/ instead.

mod error;
mod pagination;
mod registry;
mod search_query;
mod validation;
