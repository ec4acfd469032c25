//! Error kinds surfaced by repository operations
//!
//! Every documented failure is a distinct, recoverable variant. The only
//! variant that wraps an underlying cause is `StorageFailure`, raised when the
//! snapshot store or the workspace cannot be read or written; the operation
//! that hit it leaves the in-memory repository as it was before the call.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file is already tracked: {0}")]
    AlreadyTracked(String),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("file is not tracked: {0}")]
    NotTracked(String),

    #[error("nothing to commit")]
    NothingToCommit,

    #[error("invalid branch name: {0:?}")]
    InvalidName(String),

    #[error("branch already exists: {0}")]
    AlreadyExists(BranchName),

    #[error("there are uncommitted changes")]
    UncommittedChanges,

    #[error("branch not found: {0}")]
    BranchNotFound(String),

    #[error("commit not found: {0}")]
    CommitNotFound(String),

    #[error("cannot merge with branch: {0}")]
    InvalidTarget(String),

    #[error("commit id {0} is already taken by another commit")]
    IdCollision(CommitId),

    #[error("storage failure: {0:#}")]
    StorageFailure(#[from] anyhow::Error),
}
