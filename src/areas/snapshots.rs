//! Snapshot storage
//!
//! Commits record fingerprints only; the content of every added or modified
//! file is copied into a snapshot store keyed by the commit id, and copied
//! back into the workspace on checkout, reset and merge.
//!
//! ## Layout
//!
//! `FsSnapshotStore` keeps everything in one private directory allocated next
//! to the workspace:
//!
//! ```text
//! svc_commits_<x>/
//!     <commit-id>/
//!         <file-name>     zlib-compressed copy of the file
//! ```

use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit_id::CommitId;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Prefix of the directory allocated for a repository's snapshots
const STORE_DIR_PREFIX: &str = "svc_commits_";

/// Collaborator that moves file content between the workspace and storage
pub trait SnapshotStore: std::fmt::Debug {
    /// Copy a working file into the snapshot of `commit_id`
    fn snapshot(&mut self, file_name: &str, commit_id: &CommitId) -> anyhow::Result<()>;

    /// Copy a file from the snapshot of `commit_id` back into the workspace
    fn restore(&self, file_name: &str, commit_id: &CommitId) -> anyhow::Result<()>;

    /// Overwrite a working file with the content of `source`
    fn install(&self, source: &Path, file_name: &str) -> anyhow::Result<()>;

    /// Drop whatever was stored for `commit_id`
    fn discard(&mut self, commit_id: &CommitId) -> anyhow::Result<()>;

    /// Remove all stored snapshots
    fn teardown(&mut self) -> anyhow::Result<()>;
}

#[derive(Debug)]
pub struct FsSnapshotStore {
    path: Box<Path>,
    workspace: Workspace,
}

impl FsSnapshotStore {
    /// Allocate a fresh `svc_commits_<x>` directory under `root`, trying
    /// suffixes `a` to `z` until one is free
    pub fn allocate(root: &Path, workspace: Workspace) -> anyhow::Result<Self> {
        for suffix in 'a'..='z' {
            let path = root.join(format!("{STORE_DIR_PREFIX}{suffix}"));

            match std::fs::create_dir(&path) {
                Ok(()) => {
                    tracing::debug!(path = %path.display(), "allocated snapshot store");
                    return Ok(FsSnapshotStore {
                        path: path.into_boxed_path(),
                        workspace,
                    });
                }
                Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => continue,
                Err(err) => {
                    return Err(err).with_context(|| {
                        format!("Unable to create snapshot directory {}", path.display())
                    });
                }
            }
        }

        anyhow::bail!("no free snapshot directory left in {}", root.display())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn snapshot_path(&self, file_name: &str, commit_id: &CommitId) -> PathBuf {
        self.path.join(commit_id.as_ref()).join(file_name)
    }

    fn write_atomically(path: &Path, content: &[u8]) -> anyhow::Result<()> {
        let dir = path
            .parent()
            .with_context(|| format!("Invalid snapshot path {}", path.display()))?;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Unable to create directory {}", dir.display()))?;

        let temp_path = dir.join(Self::generate_temp_name());
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Unable to open file {}", temp_path.display()))?;

        file.write_all(content)
            .with_context(|| format!("Unable to write file {}", temp_path.display()))?;

        // rename the temp file into place to make the write atomic
        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Unable to rename file to {}", path.display()))?;

        Ok(())
    }

    fn compress(data: &[u8]) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(data)
            .context("Unable to compress snapshot content")?;

        encoder
            .finish()
            .map(Bytes::from)
            .context("Unable to finish compressing snapshot content")
    }

    fn decompress(data: &[u8]) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress snapshot content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!(".tmp-snapshot-{}", rand::random::<u32>())
    }
}

impl SnapshotStore for FsSnapshotStore {
    fn snapshot(&mut self, file_name: &str, commit_id: &CommitId) -> anyhow::Result<()> {
        let content = self.workspace.read_file(file_name)?;
        let compressed = Self::compress(&content)?;

        Self::write_atomically(&self.snapshot_path(file_name, commit_id), &compressed)
    }

    fn restore(&self, file_name: &str, commit_id: &CommitId) -> anyhow::Result<()> {
        let snapshot_path = self.snapshot_path(file_name, commit_id);
        let compressed = std::fs::read(&snapshot_path)
            .with_context(|| format!("Unable to read snapshot {}", snapshot_path.display()))?;
        let content = Self::decompress(&compressed)?;

        Self::write_atomically(&self.workspace.file_path(file_name), &content)
    }

    fn install(&self, source: &Path, file_name: &str) -> anyhow::Result<()> {
        let source = self.workspace.path().join(source);
        let content = std::fs::read(&source)
            .with_context(|| format!("Unable to read resolved file {}", source.display()))?;

        Self::write_atomically(&self.workspace.file_path(file_name), &content)
    }

    fn discard(&mut self, commit_id: &CommitId) -> anyhow::Result<()> {
        let commit_path = self.path.join(commit_id.as_ref());

        if commit_path.exists() {
            std::fs::remove_dir_all(&commit_path).with_context(|| {
                format!("Unable to remove snapshot {}", commit_path.display())
            })?;
        }

        Ok(())
    }

    fn teardown(&mut self) -> anyhow::Result<()> {
        if self.path.exists() {
            std::fs::remove_dir_all(&self.path).with_context(|| {
                format!("Unable to remove snapshot store {}", self.path.display())
            })?;
        }
        tracing::debug!(path = %self.path.display(), "removed snapshot store");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::{FileWriteStr, PathChild};
    use pretty_assertions::assert_eq;

    fn commit_id(id: &str) -> CommitId {
        CommitId::try_parse(id).expect("valid commit id")
    }

    #[test]
    fn allocation_skips_taken_directories() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let workspace = Workspace::new(dir.path().into());

        let first = FsSnapshotStore::allocate(dir.path(), workspace.clone())?;
        let second = FsSnapshotStore::allocate(dir.path(), workspace)?;

        assert_eq!(first.path(), dir.path().join("svc_commits_a").as_path());
        assert_eq!(second.path(), dir.path().join("svc_commits_b").as_path());

        Ok(())
    }

    #[test]
    fn snapshot_then_restore_brings_back_content() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        dir.child("notes/today.txt").write_str("first draft")?;
        let workspace = Workspace::new(dir.path().into());
        let mut store = FsSnapshotStore::allocate(dir.path(), workspace)?;
        let id = commit_id("00abcd");

        store.snapshot("notes/today.txt", &id)?;
        dir.child("notes/today.txt").write_str("overwritten")?;
        store.restore("notes/today.txt", &id)?;

        let restored = std::fs::read_to_string(dir.path().join("notes/today.txt"))?;
        assert_eq!(restored, "first draft");
        assert!(store.path().join("00abcd").join("notes/today.txt").exists());

        Ok(())
    }

    #[test]
    fn restoring_a_missing_snapshot_fails() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let workspace = Workspace::new(dir.path().into());
        let store = FsSnapshotStore::allocate(dir.path(), workspace)?;

        assert!(store.restore("nothing.txt", &commit_id("000001")).is_err());

        Ok(())
    }

    #[test]
    fn install_overwrites_the_working_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        dir.child("a.txt").write_str("ours")?;
        dir.child("resolved.txt").write_str("merged")?;
        let workspace = Workspace::new(dir.path().into());
        let store = FsSnapshotStore::allocate(dir.path(), workspace)?;

        store.install(Path::new("resolved.txt"), "a.txt")?;

        assert_eq!(std::fs::read_to_string(dir.path().join("a.txt"))?, "merged");

        Ok(())
    }

    #[test]
    fn teardown_removes_the_store() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        dir.child("a.txt").write_str("content")?;
        let workspace = Workspace::new(dir.path().into());
        let mut store = FsSnapshotStore::allocate(dir.path(), workspace)?;
        store.snapshot("a.txt", &commit_id("000001"))?;

        store.discard(&commit_id("000001"))?;
        assert!(!store.path().join("000001").exists());

        store.teardown()?;
        assert!(!store.path().exists());

        Ok(())
    }
}
