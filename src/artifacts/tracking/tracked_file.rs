use crate::artifacts::objects::change::Change;
use crate::artifacts::objects::commit::FrozenFile;
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::artifacts::tracking::file_state::FileState;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TrackedFile {
    pub name: String,
    /// Last known fingerprint; meaningful while the state is `N`, `M` or `A`
    pub fingerprint: Fingerprint,
    pub state: FileState,
}

impl TrackedFile {
    /// Entry restored from a commit record
    pub fn clean_from(file: &FrozenFile) -> Self {
        TrackedFile::new(file.name.clone(), file.fingerprint, FileState::Clean)
    }

    /// Change recorded for this entry when a commit is frozen, `None` if the
    /// entry is left out of the commit entirely
    pub fn recorded_change(&self) -> Option<Change> {
        match self.state {
            FileState::Added => Some(Change::Added),
            FileState::Modified => Some(Change::Modified),
            FileState::MarkedDeleted => Some(Change::Deleted),
            FileState::StaleAdd => None,
            FileState::Clean
            | FileState::PendingAddUnavailable
            | FileState::PendingDeleteUnavailable => Some(Change::Unchanged),
        }
    }
}
