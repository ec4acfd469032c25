//! Working directory access
//!
//! The engine only ever asks the workspace two things: whether a tracked file
//! is currently reachable, and what its content is (to fingerprint it). All
//! copying in and out of the workspace goes through the snapshot store.

use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::artifacts::tracking::file_state::Reachability;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute location of a file named relative to the workspace root
    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }

    /// Only regular files count; directories (the workspace root included)
    /// are never trackable
    pub fn is_accessible(&self, file_name: &str) -> bool {
        self.file_path(file_name).is_file()
    }

    pub fn probe(&self, file_name: &str) -> Reachability {
        if self.is_accessible(file_name) {
            Reachability::Reachable
        } else {
            Reachability::Unreachable
        }
    }

    pub fn read_file(&self, file_name: &str) -> anyhow::Result<Bytes> {
        let file_path = self.file_path(file_name);

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Unable to read file {}", file_path.display()))?;

        Ok(content.into())
    }

    /// Fingerprint of a working file, `Fingerprint::ABSENT` if it is unreachable
    pub fn fingerprint(&self, file_name: &str) -> anyhow::Result<Fingerprint> {
        if !self.is_accessible(file_name) {
            return Ok(Fingerprint::ABSENT);
        }

        let content = self.read_file(file_name)?;
        Ok(Fingerprint::compute(file_name, &content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::{FileWriteStr, PathChild};
    use pretty_assertions::assert_eq;

    #[test]
    fn fingerprints_reachable_files() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        dir.child("a.txt").write_str("hello")?;
        let workspace = Workspace::new(dir.path().into());

        assert_eq!(workspace.probe("a.txt"), Reachability::Reachable);
        assert_eq!(workspace.fingerprint("a.txt")?.value(), 1027);

        Ok(())
    }

    #[test]
    fn missing_files_have_the_absent_fingerprint() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let workspace = Workspace::new(dir.path().into());

        assert_eq!(workspace.probe("missing.txt"), Reachability::Unreachable);
        assert!(workspace.fingerprint("missing.txt")?.is_absent());

        Ok(())
    }

    #[test]
    fn directories_are_unreachable() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        dir.child("docs/readme.md").write_str("read me")?;
        let workspace = Workspace::new(dir.path().into());

        assert_eq!(workspace.probe("docs"), Reachability::Unreachable);
        assert_eq!(workspace.probe(""), Reachability::Unreachable);
        assert!(workspace.fingerprint("docs")?.is_absent());
        assert_eq!(workspace.probe("docs/readme.md"), Reachability::Reachable);

        Ok(())
    }
}
