pub mod api;
pub mod favorites;
pub mod main;

use crate::domain::club::Club;
use crate::repository::ClubReader;

/// Loads the dataset, substituting an empty list when it cannot be read.
///
/// Dataset failures never reach the client; they are logged and the page is
/// rendered without clubs.
pub fn load_clubs<R>(repo: &R) -> Vec<Club>
where
    R: ClubReader + ?Sized,
{
    repo.list_clubs().unwrap_or_else(|err| {
        log::error!("Failed to load clubs: {err}");
        Vec::new()
    })
}
