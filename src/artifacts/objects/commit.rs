//! Frozen commit
//!
//! A commit is immutable once appended to the graph. It owns a sorted snapshot
//! of the tracked files (one `FrozenFile` per entry, with the change recorded
//! at freeze time) and up to two parent handles:
//!
//! - `first`: the previous head of the branch that was committed to
//! - `merged`: the head of the merged-in branch (merge commits only)
//!
//! Either slot can be empty on its own: merging into a branch without commits
//! yields a merge commit with no first parent.

use crate::areas::graph::CommitHandle;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::change::Change;
use crate::artifacts::objects::commit_id::{CommitId, compare_file_names};
use crate::artifacts::objects::fingerprint::Fingerprint;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FrozenFile {
    pub name: String,
    pub fingerprint: Fingerprint,
    pub change: Change,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct CommitParents {
    pub first: Option<CommitHandle>,
    pub merged: Option<CommitHandle>,
}

impl CommitParents {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn single(first: CommitHandle) -> Self {
        Self::new(Some(first), None)
    }
}

#[derive(Debug, Clone)]
pub struct Commit {
    id: CommitId,
    message: String,
    files: Vec<FrozenFile>,
    parents: CommitParents,
    branch: BranchName,
}

impl Commit {
    /// Sort the files into commit order and derive the id from them
    pub fn new(
        message: String,
        mut files: Vec<FrozenFile>,
        parents: CommitParents,
        branch: BranchName,
    ) -> Self {
        files.sort_by(|a, b| compare_file_names(&a.name, &b.name));
        let id = CommitId::derive(&message, &files);

        Commit {
            id,
            message,
            files,
            parents,
            branch,
        }
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn files(&self) -> &[FrozenFile] {
        &self.files
    }

    /// Present parents in order: the first parent, then the merged-in head
    pub fn parents(&self) -> impl Iterator<Item = CommitHandle> {
        self.parents.first.into_iter().chain(self.parents.merged)
    }

    /// First parent; the previous head of the branch that was committed to
    pub fn parent(&self) -> Option<CommitHandle> {
        self.parents.first
    }

    /// Branch that was current when the commit was made
    pub fn branch(&self) -> &BranchName {
        &self.branch
    }

    pub fn file(&self, name: &str) -> Option<&FrozenFile> {
        self.files.iter().find(|file| file.name == name)
    }

    /// Files still tracked after this commit (everything but deletions)
    pub fn retained_files(&self) -> impl Iterator<Item = &FrozenFile> {
        self.files
            .iter()
            .filter(|file| file.change != Change::Deleted)
    }

    pub fn is_merge(&self) -> bool {
        self.parents.merged.is_some()
    }
}
