//! Plumbing operations (read-only queries)
//!
//! ## Operations
//!
//! - `hash_file`: Fingerprint a working file
//! - `show_commit`: Render a commit with its changes and tracked files
//! - `log`: Commit lookups and parent listings
//! - `list_branches`: Branch names in creation order
//! - `status`: Reconciled tracked files of the current branch
//! - `teardown`: Purge the snapshot store

pub mod hash_file;
pub mod list_branches;
pub mod log;
pub mod show_commit;
pub mod status;
pub mod teardown;
