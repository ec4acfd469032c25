use crate::areas::repository::Repository;
use crate::errors::Result;

impl Repository {
    /// Remove every stored snapshot; the repository keeps its in-memory history
    /// but can no longer restore files
    pub fn teardown(&mut self) -> Result<()> {
        self.store.teardown()?;

        Ok(())
    }
}
