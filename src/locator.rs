//! Resource path resolution.
//!
//! The application may be started from the crate root or from a nested
//! directory, so resources configured with relative paths are looked up
//! through a short ordered list of candidates.

use std::path::{Path, PathBuf};

/// Number of parent directories searched by [`ResourceLocator::find_dir_upwards`].
pub const DEFAULT_SEARCH_DEPTH: usize = 6;

#[derive(Clone, Debug, Default)]
/// Resolves relative resource paths against a fixed set of prefixes.
pub struct ResourceLocator {
    fallback: Option<PathBuf>,
}

impl ResourceLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a last-resort candidate tried after every prefixed variant.
    pub fn fallback(mut self, path: impl Into<PathBuf>) -> Self {
        self.fallback = Some(path.into());
        self
    }

    /// Candidate paths for `path`, in lookup order.
    pub fn candidates(&self, path: &str) -> Vec<PathBuf> {
        let mut candidates: Vec<PathBuf> = vec![
            PathBuf::from(path),
            PathBuf::from(format!("./{path}")),
            PathBuf::from(format!("../{path}")),
            PathBuf::from(format!("../../{path}")),
        ];
        if let Some(fallback) = &self.fallback {
            candidates.push(fallback.clone());
        }
        candidates
    }

    /// First candidate that is an existing directory, or every tried path.
    pub fn find_dir(&self, path: &str) -> Result<PathBuf, Vec<PathBuf>> {
        let candidates = self.candidates(path);
        match candidates.iter().find(|c| c.is_dir()) {
            Some(found) => Ok(found.clone()),
            None => Err(candidates),
        }
    }

    /// Looks for `start/relative`, then the same under each parent of
    /// `start`, up to `depth` levels.
    pub fn find_dir_upwards(&self, start: &Path, relative: &str, depth: usize) -> Option<PathBuf> {
        start
            .ancestors()
            .take(depth)
            .map(|dir| dir.join(relative))
            .find(|candidate| candidate.is_dir())
    }
}

/// Renders a list of tried paths for log and error messages.
pub fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
