use serde::{Deserialize, Serialize};

/// One window of a paginated Deezer API response.
///
/// The `prev`/`next` continuation links are opaque absolute URLs handed out
/// by the API; they are followed verbatim and never constructed or rewritten
/// on the client side. `total` is whatever the endpoint reported - some
/// composite endpoints return `total = 0` next to non-empty sibling windows,
/// so it is not guaranteed to match `data.len()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,

    /// Opaque integrity marker. Passed through unvalidated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    /// Absolute URL of the previous page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    /// Absolute URL of the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl<T> PaginatedResponse<T> {
    /// Whether a usable `next` continuation link is present.
    ///
    /// Blank links are treated the same as absent ones.
    pub fn has_next(&self) -> bool {
        matches!(&self.next, Some(link) if !link.trim().is_empty())
    }

    /// Whether a usable `prev` continuation link is present.
    pub fn has_previous(&self) -> bool {
        matches!(&self.prev, Some(link) if !link.trim().is_empty())
    }
}
