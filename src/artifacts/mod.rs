//! Version control data structures and algorithms
//!
//! - `branch`: Branch names and branches
//! - `log`: First-parent ancestry walks and commit rendering
//! - `merge`: Merge plans and conflict resolutions
//! - `objects`: Fingerprints, commit ids and frozen commits
//! - `status`: Reconciliation of tracked files against the workspace
//! - `tracking`: The per-file state automaton and tracked sets

pub mod branch;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;
pub mod tracking;
