use crate::areas::repository::Repository;
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::artifacts::tracking::file_state::FileState;
use crate::artifacts::tracking::tracked_file::TrackedFile;
use crate::errors::{Error, Result};

impl Repository {
    /// Stage `file_name` for tracking on the current branch
    ///
    /// Untracked files must exist in the workspace. A file staged for deletion
    /// goes back to being staged for addition; any other tracked file is
    /// rejected.
    pub fn add(&mut self, file_name: &str) -> Result<Fingerprint> {
        let current_state = self
            .branches
            .current()
            .tracked()
            .get(file_name)
            .map(|file| file.state);

        let state = match current_state {
            Some(state) => state
                .on_stage_add()
                .ok_or_else(|| Error::AlreadyTracked(file_name.to_string()))?,
            None if self.workspace.is_accessible(file_name) => FileState::Added,
            None => return Err(Error::FileNotFound(file_name.to_string())),
        };

        let fingerprint = self.workspace.fingerprint(file_name)?;
        self.branches
            .current_mut()
            .tracked_mut()
            .insert(TrackedFile::new(file_name.to_string(), fingerprint, state));

        tracing::debug!(file = file_name, %fingerprint, "staged file for addition");
        Ok(fingerprint)
    }
}
