//! Merge plan
//!
//! A merge starts from the current branch's tracked set and adds every file
//! that only the merged branch tracks, as a staged addition carrying the
//! merged branch's fingerprint. Files tracked on both sides are left alone:
//! they count as conflicts purely by name, whether or not their contents
//! differ, and only change through an explicit resolution.

use crate::artifacts::merge::resolution::Resolution;
use crate::artifacts::tracking::file_state::FileState;
use crate::artifacts::tracking::tracked_file::TrackedFile;
use crate::artifacts::tracking::tracked_set::TrackedSet;
use std::path::Path;

/// What applying one resolution asks of the workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionAction<'r> {
    /// Overwrite the working file with the resolved content
    Install { file_name: &'r str, source: &'r Path },
    /// The file is now staged for deletion
    Deleted,
    /// The file came from the merged branch only and is no longer brought over
    Dropped,
    /// No tracked file has this name; nothing happens
    Unmatched,
}

#[derive(Debug, Clone)]
pub struct MergePlan {
    tracked: TrackedSet,
    introduced: Vec<String>,
}

impl MergePlan {
    pub fn union(ours: &TrackedSet, theirs: &TrackedSet) -> Self {
        let mut tracked = ours.clone();
        let mut introduced = Vec::new();

        for file in theirs.iter().filter(|file| !ours.contains(&file.name)) {
            tracked.insert(TrackedFile::new(
                file.name.clone(),
                file.fingerprint,
                FileState::Added,
            ));
            introduced.push(file.name.clone());
        }

        MergePlan {
            tracked,
            introduced,
        }
    }

    /// Files brought over from the merged branch, in its order
    pub fn introduced(&self) -> &[String] {
        &self.introduced
    }

    pub fn is_introduced(&self, file_name: &str) -> bool {
        self.introduced.iter().any(|name| name == file_name)
    }

    pub fn tracked(&self) -> &TrackedSet {
        &self.tracked
    }

    pub fn resolve<'r>(&mut self, resolution: &'r Resolution) -> ResolutionAction<'r> {
        let file_name = resolution.file_name();
        let introduced = self.is_introduced(file_name);

        let Some(entry) = self.tracked.get_mut(file_name) else {
            return ResolutionAction::Unmatched;
        };

        match (resolution.resolved_content(), introduced) {
            (Some(source), introduced) => {
                entry.state = if introduced {
                    FileState::Added
                } else {
                    FileState::Modified
                };
                ResolutionAction::Install { file_name, source }
            }
            (None, false) => {
                entry.state = FileState::MarkedDeleted;
                ResolutionAction::Deleted
            }
            (None, true) => {
                self.tracked.remove(file_name);
                ResolutionAction::Dropped
            }
        }
    }

    pub fn into_tracked(self) -> TrackedSet {
        self.tracked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::fingerprint::Fingerprint;
    use pretty_assertions::assert_eq;

    fn set(files: &[(&str, i32)]) -> TrackedSet {
        files
            .iter()
            .map(|(name, fingerprint)| {
                TrackedFile::new(
                    name.to_string(),
                    Fingerprint::from_raw(*fingerprint),
                    FileState::Clean,
                )
            })
            .collect()
    }

    fn states(plan: &MergePlan) -> Vec<(String, char, i32)> {
        plan.tracked()
            .iter()
            .map(|file| (file.name.clone(), file.state.code(), file.fingerprint.value()))
            .collect()
    }

    #[test]
    fn union_adds_files_only_the_other_side_tracks() {
        let plan = MergePlan::union(&set(&[("f1", 1), ("shared", 2)]), &set(&[("shared", 9), ("f2", 3)]));

        assert_eq!(
            states(&plan),
            vec![
                ("f1".to_string(), 'N', 1),
                ("shared".to_string(), 'N', 2),
                ("f2".to_string(), 'A', 3),
            ]
        );
        assert_eq!(plan.introduced(), ["f2".to_string()]);
    }

    #[test]
    fn resolving_with_content_marks_modified_or_added() {
        let mut plan = MergePlan::union(&set(&[("shared", 2)]), &set(&[("shared", 9), ("theirs", 3)]));
        let ours = Resolution::resolved("shared", "resolved/shared.txt");
        let theirs = Resolution::resolved("theirs", "resolved/theirs.txt");

        assert_eq!(
            plan.resolve(&ours),
            ResolutionAction::Install {
                file_name: "shared",
                source: Path::new("resolved/shared.txt"),
            }
        );
        assert!(matches!(plan.resolve(&theirs), ResolutionAction::Install { .. }));
        assert_eq!(
            states(&plan),
            vec![("shared".to_string(), 'M', 2), ("theirs".to_string(), 'A', 3)]
        );
    }

    #[test]
    fn resolving_without_content_deletes_or_drops() {
        let mut plan = MergePlan::union(&set(&[("shared", 2)]), &set(&[("shared", 9), ("theirs", 3)]));

        assert_eq!(plan.resolve(&Resolution::dropped("shared")), ResolutionAction::Deleted);
        assert_eq!(plan.resolve(&Resolution::dropped("theirs")), ResolutionAction::Dropped);
        assert_eq!(states(&plan), vec![("shared".to_string(), 'D', 2)]);
    }

    #[test]
    fn unmatched_resolutions_change_nothing() {
        let mut plan = MergePlan::union(&set(&[("a", 1)]), &set(&[("b", 2)]));
        let before = plan.tracked().clone();

        assert_eq!(
            plan.resolve(&Resolution::dropped("nobody")),
            ResolutionAction::Unmatched
        );
        assert_eq!(plan.tracked(), &before);
    }
}
