//! DTOs exposed by the JSON API endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::club::Club;
use crate::dto::query::first_value;

/// Query parameters accepted by the `/api/clubs` service.
///
/// Every value is kept as raw text; malformed numbers fall back to defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubsQuery {
    #[serde(default, deserialize_with = "first_value")]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "first_value")]
    pub min_year: Option<String>,
    #[serde(default, deserialize_with = "first_value")]
    pub max_year: Option<String>,
    #[serde(default, deserialize_with = "first_value")]
    pub page: Option<String>,
    #[serde(default, deserialize_with = "first_value")]
    pub page_size: Option<String>,
}

/// Result payload returned by [`crate::services::api::list_clubs`].
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClubsResponse {
    /// Clubs on the requested page.
    pub clubs: Vec<Club>,
    /// Number of clubs matching the filter across all pages.
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}
