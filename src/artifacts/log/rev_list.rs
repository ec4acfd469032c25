use crate::areas::graph::{CommitGraph, CommitHandle};
use crate::artifacts::objects::commit::Commit;
use derive_new::new;

/// Lazy walk over a commit and its first-parent ancestors
///
/// The walk is finite (parents always point at older commits) and can be
/// restarted by cloning it before consuming.
#[derive(Debug, Clone, new)]
pub struct FirstParentWalk<'g> {
    graph: &'g CommitGraph,
    current: Option<CommitHandle>,
}

impl<'g> Iterator for FirstParentWalk<'g> {
    type Item = &'g Commit;

    fn next(&mut self) -> Option<Self::Item> {
        let commit = self.graph.get(self.current?)?;
        // move to the first parent for the next iteration
        self.current = commit.parent();
        Some(commit)
    }
}
