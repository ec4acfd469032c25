//! Working state inspection
//!
//! - `reconciler`: brings a tracked set in line with the workspace and the head commit

pub mod reconciler;
