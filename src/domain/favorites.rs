//! Favorite club identifiers carried in the `favorites` cookie.
//!
//! The set is a plain value: it is parsed from the incoming cookie,
//! transformed by the favorites services and serialized back into the
//! outgoing cookie. Nothing is stored on the server.

use std::collections::HashSet;

/// Name of the cookie holding the comma-joined favorite ids.
pub const FAVORITES_COOKIE: &str = "favorites";

/// Lifetime of the favorites cookie after an add or remove, in days.
pub const FAVORITES_MAX_AGE_DAYS: i64 = 30;

/// Returns `true` when `id` can be stored in the cookie without escaping.
pub fn is_valid_favorite_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Insertion-ordered set of favorite club ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: Vec<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a cookie value such as `"12,34,56"`.
    ///
    /// Empty segments are skipped and surrounding double quotes are removed.
    pub fn parse(value: &str) -> Self {
        let value = value.trim_matches('"');
        let mut set = Self::new();
        for id in value.split(',').filter(|id| !id.is_empty()) {
            set.add(id);
        }
        set
    }

    /// Joins the ids with commas, in insertion order.
    pub fn serialize(&self) -> String {
        self.ids.join(",")
    }

    /// Appends `id` unless it is already present. Returns whether it was added.
    pub fn add(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Removes `id` if present. Returns whether it was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|fav| fav != id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav == id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Membership lookup keyed by club id string.
    pub fn to_lookup(&self) -> HashSet<String> {
        self.ids.iter().cloned().collect()
    }
}
