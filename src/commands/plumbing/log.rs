use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;

impl Repository {
    /// Find a commit anywhere in the graph by its id
    pub fn lookup_commit(&self, commit_id: &str) -> Option<&Commit> {
        self.graph
            .lookup(commit_id)
            .and_then(|handle| self.graph.get(handle))
    }

    /// Parent ids in order: the previous head first, then the merged-in head
    pub fn parents_of(&self, commit: &Commit) -> Vec<CommitId> {
        self.graph.parent_ids(commit)
    }

    /// Commits on the current branch's first-parent chain, newest first
    pub fn log(&self) -> impl Iterator<Item = &Commit> {
        self.graph.first_parent_walk(self.current_branch().head())
    }
}
