use std::path::PathBuf;

use thiserror::Error;

use crate::locator::display_paths;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Dataset not found; tried: {}; last error: {reason}", display_paths(tried))]
    DatasetUnavailable { tried: Vec<PathBuf>, reason: String },

    #[error("Dataset is malformed: {0}")]
    DatasetMalformed(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::DatasetMalformed(err.to_string())
    }
}
