use crate::{domain::club::Club, repository::errors::RepositoryResult};

pub mod errors;
pub mod json;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use json::JsonClubRepository;

/// Read access to the club dataset.
pub trait ClubReader {
    /// Loads every club, in dataset order.
    fn list_clubs(&self) -> RepositoryResult<Vec<Club>>;
}
