pub mod client;
pub mod error;
pub mod pagination;
pub mod registry;
pub mod resource;
pub mod routes;
pub mod validation;

#[cfg(test)]
mod tests;

pub use client::DeezerApiClient;
pub use error::{DeezerApiError, DeezerClientError, ErrorCode};
pub use pagination::PageCursor;
pub use registry::GlobalApiClient;
pub use resource::Resource;

pub const API_DEEZER_HOST: &str = "api.deezer.com";
pub const API_DEEZER_URL: &str = const_format::concatcp!("https://", API_DEEZER_HOST);
