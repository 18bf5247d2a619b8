// Integration tests against a local wiremock stub of the Deezer API.
//
// Client construction registers into the process-global registry, so every
// test that builds a client is serialized.

mod helpers;
mod pagination;
mod registry;
mod resource;
mod routes;
mod validation;
