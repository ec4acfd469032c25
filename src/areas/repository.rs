use crate::areas::branches::BranchTable;
use crate::areas::graph::{CommitGraph, CommitHandle};
use crate::areas::snapshots::SnapshotStore;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch::Branch;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::status::reconciler::Reconciler;
use crate::artifacts::tracking::tracked_file::TrackedFile;
use crate::artifacts::tracking::tracked_set::TrackedSet;
use crate::errors::Result;
use anyhow::Context;
use std::path::Path;

/// A single repository instance
///
/// Owns the commit graph, the branch table and the snapshot store. Every
/// operation runs to completion before the next one starts; callers that share
/// a repository across threads must wrap it in a lock themselves.
#[derive(Debug)]
pub struct Repository {
    pub(crate) workspace: Workspace,
    pub(crate) graph: CommitGraph,
    pub(crate) branches: BranchTable,
    pub(crate) store: Box<dyn SnapshotStore>,
}

impl Repository {
    /// Build a repository over `path` backed by the given snapshot store
    pub fn with_store(path: &Path, store: Box<dyn SnapshotStore>) -> Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve workspace {}", path.display()))?;

        Ok(Repository {
            workspace: Workspace::new(path.into_boxed_path()),
            graph: CommitGraph::default(),
            branches: BranchTable::default(),
            store,
        })
    }

    pub fn path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn graph(&self) -> &CommitGraph {
        &self.graph
    }

    pub fn current_branch(&self) -> &Branch {
        self.branches.current()
    }

    pub fn head(&self) -> Option<&Commit> {
        self.current_branch()
            .head()
            .and_then(|head| self.graph.get(head))
    }

    /// Reconcile the current branch against the workspace and report whether
    /// anything is waiting to be committed
    pub fn has_pending_changes(&mut self) -> Result<bool> {
        let branch = self.branches.current_mut();
        let head = branch.head().and_then(|head| self.graph.get(head));

        Reconciler::new(&self.workspace, head).has_pending_changes(branch.tracked_mut())
    }

    /// Rebuild a branch's tracked set from `commit`, restoring every retained
    /// file into the workspace, and move the branch head there
    ///
    /// Files are restored before the branch is touched; if a restore fails the
    /// workspace may hold some restored files but the branch is unchanged.
    pub(crate) fn restore_commit(&mut self, branch_index: usize, commit: CommitHandle) -> Result<()> {
        let target = self
            .graph
            .get(commit)
            .context("commit handle does not belong to this repository")?;

        let mut tracked = TrackedSet::default();
        for file in target.retained_files() {
            match self.graph.snapshot_source(Some(commit), &file.name) {
                Some(source) => self.store.restore(&file.name, source.id())?,
                None => {
                    tracing::warn!(file = %file.name, commit = %target.id(), "no stored copy to restore")
                }
            }
            tracked.insert(TrackedFile::clean_from(file));
        }

        let branch = self
            .branches
            .get_mut(branch_index)
            .context("branch index does not belong to this repository")?;
        branch.replace_tracked(tracked);
        branch.set_head(commit);

        Ok(())
    }
}
