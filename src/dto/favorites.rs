//! Outcome of favorites mutations, translated into cookies by the routes.

use crate::domain::favorites::FavoriteSet;

#[derive(Debug, PartialEq, Eq)]
pub enum FavoriteUpdate {
    /// Nothing to write back to the client.
    Unchanged,
    /// Store the set in the cookie.
    Persist(FavoriteSet),
    /// Expire the cookie on the client.
    Expire,
}
