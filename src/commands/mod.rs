//! Repository operations
//!
//! Every operation is an `impl Repository` block of its own, split in two
//! groups:
//!
//! - `porcelain`: operations that change the repository (add, commit, merge, etc.)
//! - `plumbing`: read-only queries (hash a file, show a commit, list branches)
//!
//! `script` drives both from a line-oriented script for the `svc` binary.

pub mod plumbing;
pub mod porcelain;
pub mod script;
