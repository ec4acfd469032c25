//! Tracked files of a branch
//!
//! - `file_state`: the per-file automaton (`N`, `A`, `M`, `D`, `a`, `d`, `c`)
//! - `tracked_file`: one tracked entry (name, fingerprint, state)
//! - `tracked_set`: insertion-ordered set of entries keyed by file name

pub mod file_state;
pub mod tracked_file;
pub mod tracked_set;
