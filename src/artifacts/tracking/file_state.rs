//! Per-file tracking automaton
//!
//! | state | on add   | on remove | unreachable | reachable | before commit |
//! |-------|----------|-----------|-------------|-----------|---------------|
//! | `N`   | rejected | `D`       | `d`         | `N`       | `N`           |
//! | `A`   | rejected | `D`       | `a`         | `A`       | `A`           |
//! | `M`   | rejected | `D`       | `d`         | `M`       | `M`           |
//! | `D`   | `A`      | rejected  | `D`         | `D`       | `D`           |
//! | `a`   | rejected | `D`       | `a`         | `A`       | `c`           |
//! | `d`   | rejected | `D`       | `d`         | `N`       | `D`           |
//! | `c`   | rejected | `D`       | `c`         | `c`       | `c`           |
//!
//! After probing, `N` and `M` entries are compared against the head commit and
//! settle on `N` (same fingerprint) or `M` (different). Every transition
//! function below is total over the seven states.

/// Result of probing the workspace for a tracked file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    Reachable,
    Unreachable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileState {
    /// `N`: committed and unchanged
    Clean,
    /// `A`: staged addition
    Added,
    /// `M`: content differs from the head commit
    Modified,
    /// `D`: staged deletion
    MarkedDeleted,
    /// `a`: staged addition whose file has vanished
    PendingAddUnavailable,
    /// `d`: committed file that has vanished
    PendingDeleteUnavailable,
    /// `c`: vanished addition to be dropped from tracking by the next commit
    StaleAdd,
}

impl FileState {
    pub fn code(&self) -> char {
        match self {
            FileState::Clean => 'N',
            FileState::Added => 'A',
            FileState::Modified => 'M',
            FileState::MarkedDeleted => 'D',
            FileState::PendingAddUnavailable => 'a',
            FileState::PendingDeleteUnavailable => 'd',
            FileState::StaleAdd => 'c',
        }
    }

    /// `stage_add` on an entry that is already tracked; `None` means the add is rejected
    pub fn on_stage_add(self) -> Option<FileState> {
        match self {
            FileState::MarkedDeleted => Some(FileState::Added),
            FileState::Clean
            | FileState::Added
            | FileState::Modified
            | FileState::PendingAddUnavailable
            | FileState::PendingDeleteUnavailable
            | FileState::StaleAdd => None,
        }
    }

    /// `stage_remove`; `None` means the entry is already slated for deletion
    pub fn on_stage_remove(self) -> Option<FileState> {
        match self {
            FileState::MarkedDeleted => None,
            FileState::Clean
            | FileState::Added
            | FileState::Modified
            | FileState::PendingAddUnavailable
            | FileState::PendingDeleteUnavailable
            | FileState::StaleAdd => Some(FileState::MarkedDeleted),
        }
    }

    /// Reachability probe run at the start of every reconciliation
    pub fn on_probe(self, reachability: Reachability) -> FileState {
        match (self, reachability) {
            // deletions are not probed
            (FileState::MarkedDeleted, _) => FileState::MarkedDeleted,
            // dropped before probing, kept as-is if it ever gets here
            (FileState::StaleAdd, _) => FileState::StaleAdd,

            (FileState::Added, Reachability::Unreachable) => FileState::PendingAddUnavailable,
            (FileState::PendingAddUnavailable, Reachability::Unreachable) => {
                FileState::PendingAddUnavailable
            }
            (
                FileState::Clean | FileState::Modified | FileState::PendingDeleteUnavailable,
                Reachability::Unreachable,
            ) => FileState::PendingDeleteUnavailable,

            (FileState::PendingAddUnavailable, Reachability::Reachable) => FileState::Added,
            (FileState::PendingDeleteUnavailable, Reachability::Reachable) => FileState::Clean,
            (
                state @ (FileState::Clean | FileState::Added | FileState::Modified),
                Reachability::Reachable,
            ) => state,
        }
    }

    /// Outcome of comparing the working fingerprint against the head commit's record
    pub fn on_compare(self, matches_head: bool) -> FileState {
        match self {
            FileState::Clean | FileState::Modified if matches_head => FileState::Clean,
            FileState::Clean | FileState::Modified => FileState::Modified,
            FileState::Added
            | FileState::MarkedDeleted
            | FileState::PendingAddUnavailable
            | FileState::PendingDeleteUnavailable
            | FileState::StaleAdd => self,
        }
    }

    /// Promotion of transient states right before a commit is frozen
    pub fn on_prepare_commit(self) -> FileState {
        match self {
            FileState::PendingAddUnavailable => FileState::StaleAdd,
            FileState::PendingDeleteUnavailable => FileState::MarkedDeleted,
            FileState::Clean
            | FileState::Added
            | FileState::Modified
            | FileState::MarkedDeleted
            | FileState::StaleAdd => self,
        }
    }

    /// Whether this entry's fingerprint is compared against the head commit
    pub fn is_content_compared(&self) -> bool {
        matches!(self, FileState::Clean | FileState::Modified)
    }

    /// Whether this entry counts as a change waiting to be committed
    pub fn is_pending_change(&self) -> bool {
        !matches!(
            self,
            FileState::Clean | FileState::PendingAddUnavailable
        )
    }
}
