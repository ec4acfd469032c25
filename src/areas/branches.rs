//! Branch table
//!
//! Holds every branch of a repository in creation order together with the
//! pointer to the current branch. Exactly one branch is current at any time;
//! branches are never deleted.

use crate::artifacts::branch::branch::Branch;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::{Error, Result};

#[derive(Debug)]
pub struct BranchTable {
    branches: Vec<Branch>,
    current: usize,
}

impl Default for BranchTable {
    fn default() -> Self {
        BranchTable {
            branches: vec![Branch::new(BranchName::default_branch())],
            current: 0,
        }
    }
}

impl BranchTable {
    pub fn current(&self) -> &Branch {
        &self.branches[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Branch {
        &mut self.branches[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.branches
            .iter()
            .position(|branch| branch.name() == name)
    }

    pub fn get(&self, index: usize) -> Option<&Branch> {
        self.branches.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Branch> {
        self.branches.get_mut(index)
    }

    /// Register a new branch; names are unique within the table
    pub fn insert(&mut self, branch: Branch) -> Result<()> {
        if self.position(branch.name().as_ref()).is_some() {
            return Err(Error::AlreadyExists(branch.name().clone()));
        }

        self.branches.push(branch);
        Ok(())
    }

    pub fn switch_to(&mut self, index: usize) -> Result<()> {
        if index >= self.branches.len() {
            return Err(Error::BranchNotFound(index.to_string()));
        }

        self.current = index;
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &BranchName> {
        self.branches.iter().map(|branch| branch.name())
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}
