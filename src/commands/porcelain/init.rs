use crate::areas::repository::Repository;
use crate::areas::snapshots::FsSnapshotStore;
use crate::areas::workspace::Workspace;
use crate::config::Config;
use crate::errors::Result;
use anyhow::Context;
use std::path::Path;

impl Repository {
    /// Create a repository over the workspace at `path`
    ///
    /// Starts with a single `master` branch, no commits and nothing tracked.
    /// A private snapshot directory is allocated under the configured snapshot
    /// root, or under the workspace itself when none is configured.
    pub fn init(path: &Path, config: &Config) -> Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve workspace {}", path.display()))?;
        let snapshot_root = config.snapshot_root.as_deref().unwrap_or(path.as_path());

        let workspace = Workspace::new(path.clone().into_boxed_path());
        let store = FsSnapshotStore::allocate(snapshot_root, workspace)?;
        tracing::info!(
            workspace = %path.display(),
            snapshots = %store.path().display(),
            "initialized repository"
        );

        Repository::with_store(&path, Box::new(store))
    }
}
