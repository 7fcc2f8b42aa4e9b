//! Form posted by the add/remove favorite buttons.

use serde::Deserialize;

use crate::domain::favorites::is_valid_favorite_id;
use crate::dto::query::first_value;

#[derive(Debug, Default, Deserialize)]
pub struct FavoriteForm {
    #[serde(default, deserialize_with = "first_value")]
    pub club_id: Option<String>,
}

impl FavoriteForm {
    /// Club id when present and safe to store in the cookie.
    pub fn club_id(&self) -> Option<&str> {
        self.club_id
            .as_deref()
            .filter(|id| is_valid_favorite_id(id))
    }

    /// Prefers the posted value over the one in the query string.
    pub fn or(self, other: FavoriteForm) -> FavoriteForm {
        if self.club_id().is_some() { self } else { other }
    }
}
