use crate::areas::repository::Repository;
use crate::errors::{Error, Result};

impl Repository {
    /// Switch to another branch, restoring the files of its head commit
    ///
    /// A branch without commits is switched to as is.
    pub fn checkout(&mut self, branch_name: &str) -> Result<()> {
        let target = self
            .branches
            .position(branch_name)
            .ok_or_else(|| Error::BranchNotFound(branch_name.to_string()))?;

        if self.has_pending_changes()? {
            return Err(Error::UncommittedChanges);
        }

        let head = self.branches.get(target).and_then(|branch| branch.head());
        if let Some(head) = head {
            self.restore_commit(target, head)?;
        }
        self.branches.switch_to(target)?;

        tracing::info!(branch = branch_name, "switched branch");
        Ok(())
    }
}
