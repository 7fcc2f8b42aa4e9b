use std::fs;

use crate::{
    domain::club::Club,
    locator::ResourceLocator,
    repository::{
        ClubReader,
        errors::{RepositoryError, RepositoryResult},
    },
};

/// Location tried when the configured dataset path cannot be resolved.
pub const DEFAULT_DATASET_PATH: &str = "data/clubs.json";

/// JSON file implementation of [`ClubReader`].
///
/// The file is read again on every call; edits to the dataset show up on the
/// next request without a restart.
#[derive(Clone, Debug)]
pub struct JsonClubRepository {
    path: String,
    locator: ResourceLocator,
}

impl JsonClubRepository {
    /// Repository for `path`, falling back to [`DEFAULT_DATASET_PATH`].
    pub fn new(path: impl Into<String>) -> Self {
        Self::with_locator(path, ResourceLocator::new().fallback(DEFAULT_DATASET_PATH))
    }

    pub fn with_locator(path: impl Into<String>, locator: ResourceLocator) -> Self {
        Self {
            path: path.into(),
            locator,
        }
    }

    fn read_dataset(&self) -> RepositoryResult<Vec<u8>> {
        let candidates = self.locator.candidates(&self.path);
        let mut reason = String::new();
        for candidate in &candidates {
            match fs::read(candidate) {
                Ok(bytes) => {
                    log::debug!("Loaded clubs dataset from {}", candidate.display());
                    return Ok(bytes);
                }
                Err(err) => reason = err.to_string(),
            }
        }
        Err(RepositoryError::DatasetUnavailable {
            tried: candidates,
            reason,
        })
    }
}

impl ClubReader for JsonClubRepository {
    fn list_clubs(&self) -> RepositoryResult<Vec<Club>> {
        let bytes = self.read_dataset()?;
        let clubs = serde_json::from_slice::<Vec<Club>>(&bytes)?;
        Ok(clubs)
    }
}
