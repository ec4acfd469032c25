use crate::areas::repository::Repository;
use crate::errors::{Error, Result};

impl Repository {
    /// Move the current branch to any commit in the graph and restore its files
    ///
    /// Pending changes are discarded.
    pub fn reset(&mut self, commit_id: &str) -> Result<()> {
        let commit = self
            .graph
            .lookup(commit_id)
            .ok_or_else(|| Error::CommitNotFound(commit_id.to_string()))?;

        let current = self.branches.current_index();
        self.restore_commit(current, commit)?;

        tracing::info!(commit = commit_id, branch = %self.current_branch().name(), "reset branch");
        Ok(())
    }
}
