//! Value types recorded in the commit graph
//!
//! - **Fingerprint**: weak checksum of a file's path and content
//! - **Change**: the per-file change tag frozen into a commit
//! - **CommitId**: six hex digit identifier derived from message and changes
//! - **Commit**: immutable snapshot of tracked files plus parent links

pub mod change;
pub mod commit;
pub mod commit_id;
pub mod fingerprint;
