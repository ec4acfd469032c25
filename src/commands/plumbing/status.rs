use crate::areas::repository::Repository;
use crate::artifacts::tracking::tracked_file::TrackedFile;
use crate::errors::Result;

impl Repository {
    /// Tracked files of the current branch after reconciling with the workspace
    pub fn status(&mut self) -> Result<Vec<TrackedFile>> {
        self.has_pending_changes()?;

        Ok(self.current_branch().tracked().iter().cloned().collect())
    }
}
