use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::club::Club;
use crate::dto::query::first_value;

/// Query parameters accepted by the home page.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexQuery {
    /// Search text matched against club names and codes.
    #[serde(default, deserialize_with = "first_value")]
    pub search: Option<String>,
    /// Lower founding-year bound, kept as text so bad input is just ignored.
    #[serde(default, deserialize_with = "first_value")]
    pub min_year: Option<String>,
    /// Upper founding-year bound.
    #[serde(default, deserialize_with = "first_value")]
    pub max_year: Option<String>,
}

/// Data handed to the page templates.
#[derive(Debug, Default, Serialize)]
pub struct PageData {
    pub title: String,
    pub message: String,
    /// Filtered clubs; absent on pages without a club listing.
    pub clubs: Option<Vec<Club>>,
    /// Favorite clubs in dataset order.
    pub favorites: Vec<Club>,
    /// Ids of the favorite clubs, for membership checks in templates.
    pub favorite_ids: HashSet<String>,
    /// Search form values echoed back as typed.
    pub search_query: String,
    pub min_year: String,
    pub max_year: String,
}

impl PageData {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Default::default()
        }
    }
}
