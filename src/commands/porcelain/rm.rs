use crate::areas::repository::Repository;
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::errors::{Error, Result};

impl Repository {
    /// Stage a tracked file for deletion, returning its last known fingerprint
    pub fn remove(&mut self, file_name: &str) -> Result<Fingerprint> {
        let file = self
            .branches
            .current_mut()
            .tracked_mut()
            .get_mut(file_name)
            .ok_or_else(|| Error::NotTracked(file_name.to_string()))?;

        file.state = file
            .state
            .on_stage_remove()
            .ok_or_else(|| Error::NotTracked(file_name.to_string()))?;

        tracing::debug!(file = file_name, "staged file for deletion");
        Ok(file.fingerprint)
    }
}
