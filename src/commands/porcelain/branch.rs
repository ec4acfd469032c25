use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::{Error, Result};

impl Repository {
    /// Fork a new branch off the current one, copying its head and tracked files
    ///
    /// The current branch stays current.
    pub fn branch(&mut self, branch_name: &str) -> Result<()> {
        let branch_name = BranchName::try_parse(branch_name)?;

        if self.branches.position(branch_name.as_ref()).is_some() {
            return Err(Error::AlreadyExists(branch_name));
        }

        if self.has_pending_changes()? {
            return Err(Error::UncommittedChanges);
        }

        let branch = self.branches.current().fork(branch_name);
        tracing::info!(branch = %branch.name(), from = %self.current_branch().name(), "created branch");
        self.branches.insert(branch)?;

        Ok(())
    }
}
