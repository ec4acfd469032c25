//! Porcelain operations (the ones that change a repository)
//!
//! ## Operations
//!
//! - `init`: Create a fresh repository with a `master` branch
//! - `add`: Stage a file for tracking
//! - `rm`: Stage a tracked file for deletion
//! - `commit`: Freeze the current branch's tracked files into a commit
//! - `branch`: Fork a new branch off the current one
//! - `checkout`: Switch to another branch and restore its files
//! - `reset`: Move the current branch to any commit and restore its files
//! - `merge`: Merge another branch into the current one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod merge;
pub mod reset;
pub mod rm;
