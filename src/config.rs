//! Repository configuration
//!
//! Read from the environment:
//!
//! - `SVC_SNAPSHOT_ROOT`: directory the snapshot store is allocated in
//!   (defaults to the workspace root)
//! - `SVC_LOG`: log filter directive (defaults to `warn`)

use std::path::PathBuf;

pub const SNAPSHOT_ROOT_VAR: &str = "SVC_SNAPSHOT_ROOT";
pub const LOG_FILTER_VAR: &str = "SVC_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub snapshot_root: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            snapshot_root: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_env() -> Self {
        let snapshot_root = std::env::var_os(SNAPSHOT_ROOT_VAR)
            .filter(|root| !root.is_empty())
            .map(PathBuf::from);
        let log_filter = std::env::var(LOG_FILTER_VAR)
            .ok()
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Config {
            snapshot_root,
            log_filter,
        }
    }

    pub fn with_snapshot_root(mut self, snapshot_root: impl Into<PathBuf>) -> Self {
        self.snapshot_root = Some(snapshot_root.into());
        self
    }

    pub fn with_log_filter(mut self, log_filter: impl Into<String>) -> Self {
        self.log_filter = log_filter.into();
        self
    }
}
