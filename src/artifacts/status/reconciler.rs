use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::tracking::file_state::FileState;
use crate::artifacts::tracking::tracked_set::TrackedSet;
use crate::errors::Result;
use derive_new::new;

/// Reconciles a branch's tracked set with the workspace and its head commit
#[derive(new)]
pub struct Reconciler<'r> {
    workspace: &'r Workspace,
    head: Option<&'r Commit>,
}

impl<'r> Reconciler<'r> {
    /// Probe every tracked file, then compare clean and modified entries
    /// against the fingerprint recorded in the head commit
    ///
    /// Entries marked `c` by an earlier commit preparation are dropped first.
    /// Running this twice without workspace changes yields the same states.
    pub fn reconcile(&self, tracked: &mut TrackedSet) -> Result<()> {
        tracked.retain(|file| file.state != FileState::StaleAdd);

        for file in tracked.iter_mut() {
            let next = file.state.on_probe(self.workspace.probe(&file.name));

            // a vanished addition came back, its content may differ now
            if file.state == FileState::PendingAddUnavailable && next == FileState::Added {
                file.fingerprint = self.workspace.fingerprint(&file.name)?;
            }
            file.state = next;
        }

        let Some(head) = self.head else {
            return Ok(());
        };

        for file in tracked
            .iter_mut()
            .filter(|file| file.state.is_content_compared())
        {
            file.fingerprint = self.workspace.fingerprint(&file.name)?;

            if let Some(recorded) = head.file(&file.name) {
                file.state = file.state.on_compare(recorded.fingerprint == file.fingerprint);
            }
        }

        Ok(())
    }

    pub fn has_pending_changes(&self, tracked: &mut TrackedSet) -> Result<bool> {
        self.reconcile(tracked)?;

        Ok(tracked.iter().any(|file| file.state.is_pending_change()))
    }

    /// Reconcile, promote `a` to `c` and `d` to `D`, then report whether the
    /// set still holds anything worth committing
    pub fn prepare_commit(&self, tracked: &mut TrackedSet) -> Result<bool> {
        self.reconcile(tracked)?;

        for file in tracked.iter_mut() {
            file.state = file.state.on_prepare_commit();
        }

        self.has_pending_changes(tracked)
    }
}
