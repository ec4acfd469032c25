//! Commit graph
//!
//! Commits live in an append-only arena. Parent links are arena handles, never
//! owning pointers, and a new commit can only point at commits that already
//! exist, so the graph is acyclic by construction. A side table maps commit ids
//! to handles for lookups by id.

use crate::artifacts::log::rev_list::FirstParentWalk;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{Error, Result};
use std::collections::HashMap;

/// Position of a commit in the graph's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitHandle(usize);

#[derive(Debug, Default)]
pub struct CommitGraph {
    commits: Vec<Commit>,
    ids: HashMap<CommitId, CommitHandle>,
}

impl CommitGraph {
    pub fn get(&self, handle: CommitHandle) -> Option<&Commit> {
        self.commits.get(handle.0)
    }

    pub fn lookup(&self, id: &str) -> Option<CommitHandle> {
        let id = CommitId::try_parse(id)?;
        self.ids.get(&id).copied()
    }

    pub fn contains(&self, id: &CommitId) -> bool {
        self.ids.contains_key(id)
    }

    /// Append a commit; ids are unique within a graph
    pub fn append(&mut self, commit: Commit) -> Result<CommitHandle> {
        if self.contains(commit.id()) {
            return Err(Error::IdCollision(commit.id().clone()));
        }

        let handle = CommitHandle(self.commits.len());
        self.ids.insert(commit.id().clone(), handle);
        self.commits.push(commit);

        Ok(handle)
    }

    pub fn first_parent_walk(&self, start: Option<CommitHandle>) -> FirstParentWalk<'_> {
        FirstParentWalk::new(self, start)
    }

    /// Nearest commit on the first-parent chain from `start` (inclusive) that
    /// stored a copy of `file_name`
    pub fn snapshot_source(&self, start: Option<CommitHandle>, file_name: &str) -> Option<&Commit> {
        self.first_parent_walk(start).find(|commit| {
            commit
                .file(file_name)
                .is_some_and(|file| file.change.has_snapshot())
        })
    }

    pub fn parent_ids(&self, commit: &Commit) -> Vec<CommitId> {
        commit
            .parents()
            .filter_map(|parent| self.get(parent))
            .map(|parent| parent.id().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}
