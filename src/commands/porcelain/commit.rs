use crate::areas::graph::CommitHandle;
use crate::areas::repository::Repository;
use crate::artifacts::objects::change::Change;
use crate::artifacts::objects::commit::{Commit, CommitParents, FrozenFile};
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::artifacts::status::reconciler::Reconciler;
use crate::artifacts::tracking::file_state::FileState;
use crate::artifacts::tracking::tracked_set::TrackedSet;
use crate::errors::{Error, Result};

impl Repository {
    pub fn commit(&mut self, message: &str) -> Result<CommitId> {
        let tracked = self.branches.current().tracked().clone();
        let handle = self.freeze(tracked, message, None)?;

        self.commit_id(handle)
    }

    /// Freeze `tracked` into a new commit on the current branch
    ///
    /// The set is worked on as a copy: the branch only picks it up (and moves
    /// its head) once every snapshot has been stored and the commit is in the
    /// graph. `merged` becomes the second parent of a merge commit.
    pub(crate) fn freeze(
        &mut self,
        mut tracked: TrackedSet,
        message: &str,
        merged: Option<CommitHandle>,
    ) -> Result<CommitHandle> {
        let branch = self.branches.current();
        let branch_name = branch.name().clone();
        let previous_head = branch.head();
        let head = previous_head.and_then(|head| self.graph.get(head));

        if !Reconciler::new(&self.workspace, head).prepare_commit(&mut tracked)? {
            return Err(Error::NothingToCommit);
        }

        let mut files = Vec::with_capacity(tracked.len());
        for file in tracked.iter_mut() {
            let Some(change) = file.recorded_change() else {
                continue;
            };

            let fingerprint = match change {
                Change::Added => {
                    file.fingerprint = self.workspace.fingerprint(&file.name)?;
                    file.fingerprint
                }
                Change::Deleted => Fingerprint::ABSENT,
                Change::Modified | Change::Unchanged => file.fingerprint,
            };
            files.push(FrozenFile::new(file.name.clone(), fingerprint, change));
        }

        let parents = CommitParents::new(previous_head, merged);
        let commit = Commit::new(message.to_string(), files, parents, branch_name);
        if self.graph.contains(commit.id()) {
            return Err(Error::IdCollision(commit.id().clone()));
        }

        self.store_snapshots(&commit)?;

        let commit_id = commit.id().clone();
        let file_count = commit.files().len();
        let parent_count = commit.parents().count();
        let handle = self.graph.append(commit)?;

        tracked.retain(|file| {
            !matches!(file.state, FileState::MarkedDeleted | FileState::StaleAdd)
        });
        for file in tracked.iter_mut() {
            file.state = FileState::Clean;
        }

        let branch = self.branches.current_mut();
        branch.replace_tracked(tracked);
        branch.set_head(handle);

        tracing::info!(
            commit = %commit_id,
            branch = %branch.name(),
            files = file_count,
            parents = parent_count,
            "created commit"
        );

        Ok(handle)
    }

    /// Copy every added or modified file into the commit's snapshot,
    /// discarding whatever was stored if one copy fails
    fn store_snapshots(&mut self, commit: &Commit) -> Result<()> {
        let stored = commit
            .files()
            .iter()
            .filter(|file| file.change.has_snapshot())
            .try_for_each(|file| self.store.snapshot(&file.name, commit.id()));

        if let Err(err) = stored {
            if let Err(discard_err) = self.store.discard(commit.id()) {
                tracing::warn!(commit = %commit.id(), "unable to discard partial snapshot: {discard_err:#}");
            }
            return Err(err.into());
        }

        Ok(())
    }

    pub(crate) fn commit_id(&self, handle: CommitHandle) -> Result<CommitId> {
        self.graph
            .get(handle)
            .map(|commit| commit.id().clone())
            .ok_or_else(|| anyhow::anyhow!("commit handle does not belong to this repository").into())
    }
}
