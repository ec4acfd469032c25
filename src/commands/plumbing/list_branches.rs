use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;

impl Repository {
    pub fn list_branches(&self) -> Vec<&BranchName> {
        self.branches.names().collect()
    }
}
