use crate::areas::repository::Repository;
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::errors::Result;

impl Repository {
    /// Fingerprint of a working file; `Fingerprint::ABSENT` if it is unreachable
    pub fn hash_file(&self, file_name: &str) -> Result<Fingerprint> {
        Ok(self.workspace.fingerprint(file_name)?)
    }
}
