use crate::areas::repository::Repository;
use crate::artifacts::log::format::CommitFormatter;
use crate::errors::{Error, Result};

impl Repository {
    pub fn show_commit(&self, commit_id: &str) -> Result<String> {
        let commit = self
            .lookup_commit(commit_id)
            .ok_or_else(|| Error::CommitNotFound(commit_id.to_string()))?;
        let parent = commit.parent().and_then(|parent| self.graph.get(parent));

        Ok(CommitFormatter::new(commit, parent).to_string())
    }
}
