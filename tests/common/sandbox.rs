use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use rstest::fixture;
use svc::areas::repository::Repository;
use svc::config::Config;

/// A repository over a temporary workspace, with its snapshots kept in a
/// separate temporary directory
pub struct Sandbox {
    pub workspace: TempDir,
    pub snapshots: TempDir,
    pub repository: Repository,
}

impl Sandbox {
    pub fn write(&self, file_name: &str, content: &str) {
        write_file(FileSpec::new(
            self.workspace.path().join(file_name),
            content.to_string(),
        ));
    }

    pub fn read(&self, file_name: &str) -> String {
        read_file(&self.workspace.path().join(file_name))
    }

    pub fn exists(&self, file_name: &str) -> bool {
        self.workspace.path().join(file_name).exists()
    }

    pub fn delete(&self, file_name: &str) {
        std::fs::remove_file(self.workspace.path().join(file_name))
            .expect("Failed to delete file");
    }

    /// Tracked files of the current branch as `(name, state code)` pairs,
    /// reconciled first
    pub fn states(&mut self) -> Vec<(String, char)> {
        self.repository
            .status()
            .expect("Failed to reconcile tracked files")
            .into_iter()
            .map(|file| (file.name, file.state.code()))
            .collect()
    }

    pub fn tracked_names(&self) -> Vec<String> {
        let mut names = self
            .repository
            .current_branch()
            .tracked()
            .names()
            .map(str::to_string)
            .collect::<Vec<_>>();
        names.sort();
        names
    }

    pub fn head_id(&self) -> Option<String> {
        self.repository
            .head()
            .map(|commit| commit.id().to_string())
    }

    pub fn branch_names(&self) -> Vec<String> {
        self.repository
            .list_branches()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }
}

#[fixture]
pub fn sandbox() -> Sandbox {
    let workspace = TempDir::new().expect("Failed to create workspace dir");
    let snapshots = TempDir::new().expect("Failed to create snapshot dir");
    let config = Config::default().with_snapshot_root(snapshots.path());
    let repository =
        Repository::init(workspace.path(), &config).expect("Failed to init repository");

    Sandbox {
        workspace,
        snapshots,
        repository,
    }
}
