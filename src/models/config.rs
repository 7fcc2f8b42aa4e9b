//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Directory holding the page templates.
    pub templates_dir: String,
    /// JSON file with the club dataset.
    pub dataset_path: String,
    /// Directory served under `/static`. Discovered from the working
    /// directory when unset.
    #[serde(default)]
    pub static_dir: Option<String>,
}
