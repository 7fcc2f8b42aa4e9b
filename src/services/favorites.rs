//! Favorites transitions.
//!
//! Each function takes the set parsed from the request cookie and returns what
//! should be written back. A missing club id never mutates anything.

use crate::domain::favorites::FavoriteSet;
use crate::dto::favorites::FavoriteUpdate;

/// Adds `club_id`; an id already present leaves the cookie untouched.
pub fn add_favorite(mut favorites: FavoriteSet, club_id: Option<&str>) -> FavoriteUpdate {
    let Some(club_id) = club_id else {
        return FavoriteUpdate::Unchanged;
    };
    if favorites.add(club_id) {
        FavoriteUpdate::Persist(favorites)
    } else {
        FavoriteUpdate::Unchanged
    }
}

/// Removes `club_id` and stores the result even when it was absent.
pub fn remove_favorite(mut favorites: FavoriteSet, club_id: Option<&str>) -> FavoriteUpdate {
    let Some(club_id) = club_id else {
        return FavoriteUpdate::Unchanged;
    };
    favorites.remove(club_id);
    FavoriteUpdate::Persist(favorites)
}

pub fn clear_favorites() -> FavoriteUpdate {
    FavoriteUpdate::Expire
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_to_absent_cookie_persists_single_id() {
        let update = add_favorite(FavoriteSet::new(), Some("5"));
        assert_eq!(update, FavoriteUpdate::Persist(FavoriteSet::parse("5")));
    }

    #[test]
    fn add_existing_id_is_a_no_op() {
        let update = add_favorite(FavoriteSet::parse("5"), Some("5"));
        assert_eq!(update, FavoriteUpdate::Unchanged);
    }

    #[test]
    fn add_without_id_is_a_no_op() {
        assert_eq!(
            add_favorite(FavoriteSet::parse("1"), None),
            FavoriteUpdate::Unchanged
        );
    }

    #[test]
    fn remove_persists_remaining_ids() {
        let update = remove_favorite(FavoriteSet::parse("1,2,3"), Some("1"));
        assert_eq!(update, FavoriteUpdate::Persist(FavoriteSet::parse("2,3")));
    }

    #[test]
    fn remove_last_id_persists_empty_set() {
        let update = remove_favorite(FavoriteSet::parse("4"), Some("4"));
        assert_eq!(update, FavoriteUpdate::Persist(FavoriteSet::new()));
    }

    #[test]
    fn remove_absent_id_still_persists_same_set() {
        let update = remove_favorite(FavoriteSet::parse("1,2"), Some("9"));
        assert_eq!(update, FavoriteUpdate::Persist(FavoriteSet::parse("1,2")));
    }

    #[test]
    fn remove_without_id_is_a_no_op() {
        assert_eq!(
            remove_favorite(FavoriteSet::parse("1"), None),
            FavoriteUpdate::Unchanged
        );
    }

    #[test]
    fn clear_always_expires() {
        assert_eq!(clear_favorites(), FavoriteUpdate::Expire);
    }
}
