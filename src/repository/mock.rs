//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::club::Club;
use crate::repository::ClubReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl ClubReader for Repository {
        fn list_clubs(&self) -> RepositoryResult<Vec<Club>>;
    }
}
