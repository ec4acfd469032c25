use crate::areas::graph::CommitHandle;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::tracking::tracked_set::TrackedSet;
use derive_new::new;

/// A named working view: its own tracked set plus a pointer to its latest commit
///
/// Branches never share tracked entries; cloning a branch deep-copies its set.
#[derive(Debug, Clone, new)]
pub struct Branch {
    name: BranchName,
    #[new(default)]
    head: Option<CommitHandle>,
    #[new(default)]
    tracked: TrackedSet,
}

impl Branch {
    /// Fork a new branch off `self`, copying its head and tracked entries
    pub fn fork(&self, name: BranchName) -> Self {
        Branch {
            name,
            head: self.head,
            tracked: self.tracked.clone(),
        }
    }

    pub fn name(&self) -> &BranchName {
        &self.name
    }

    pub fn head(&self) -> Option<CommitHandle> {
        self.head
    }

    pub fn set_head(&mut self, head: CommitHandle) {
        self.head = Some(head);
    }

    pub fn tracked(&self) -> &TrackedSet {
        &self.tracked
    }

    pub fn tracked_mut(&mut self) -> &mut TrackedSet {
        &mut self.tracked
    }

    pub fn replace_tracked(&mut self, tracked: TrackedSet) {
        self.tracked = tracked;
    }
}
