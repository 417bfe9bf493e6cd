//! DTOs exposed by the bandstand API endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::band::Band;

/// Query parameters accepted by the `/api/v1/bands` endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct BandsQuery {
    /// Optional free-form search string applied to the band list.
    pub q: Option<String>,
    /// Optional page number for pagination.
    pub page: Option<usize>,
    /// Optional page size for pagination.
    pub size: Option<usize>,
    /// Optional sort order in `column:direction` pairs.
    pub sort: Option<String>,
}

/// Result payload returned by [`crate::services::api::list_bands`].
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BandsResponse {
    /// Total number of result pages reported by the directory service.
    pub total_pages: usize,
    /// Page of bands requested by the caller.
    pub bands: Vec<Band>,
}

/// Payload returned by the refresh polling endpoint.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionResponse {
    /// Monotonic version of the band data held by this process.
    pub version: u64,
}
