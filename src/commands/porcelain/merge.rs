use crate::areas::repository::Repository;
use crate::artifacts::merge::merge_plan::{MergePlan, ResolutionAction};
use crate::artifacts::merge::resolution::Resolution;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{Error, Result};

impl Repository {
    /// Merge `branch_name` into the current branch and commit the result
    ///
    /// Files only the other branch tracks are brought over and restored from
    /// its history. Files both branches track are kept as they are unless a
    /// resolution names them. A merge that changes nothing fails with
    /// `NothingToCommit`.
    pub fn merge(&mut self, branch_name: &str, resolutions: &[Resolution]) -> Result<CommitId> {
        let target = self
            .branches
            .position(branch_name)
            .filter(|target| *target != self.branches.current_index())
            .ok_or_else(|| Error::InvalidTarget(branch_name.to_string()))?;

        if self.has_pending_changes()? {
            return Err(Error::UncommittedChanges);
        }

        let target = self
            .branches
            .get(target)
            .ok_or_else(|| Error::InvalidTarget(branch_name.to_string()))?;
        let target_head = target.head();
        let mut plan = MergePlan::union(self.current_branch().tracked(), target.tracked());

        for file_name in plan.introduced() {
            match self.graph.snapshot_source(target_head, file_name) {
                Some(source) => self.store.restore(file_name, source.id())?,
                None => tracing::warn!(file = %file_name, branch = branch_name, "no stored copy to bring over"),
            }
        }

        for resolution in resolutions {
            match plan.resolve(resolution) {
                ResolutionAction::Install { file_name, source } => {
                    self.store.install(source, file_name)?;
                }
                ResolutionAction::Unmatched => {
                    tracing::debug!(file = resolution.file_name(), "resolution matches no tracked file");
                }
                ResolutionAction::Deleted | ResolutionAction::Dropped => {}
            }
        }

        let message = format!("Merged branch {branch_name}");
        let handle = self.freeze(plan.into_tracked(), &message, target_head)?;

        tracing::info!(branch = branch_name, resolutions = resolutions.len(), "merged branch");
        self.commit_id(handle)
    }
}
