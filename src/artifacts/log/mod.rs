//! Commit history traversal and display
//!
//! - `rev_list`: lazy first-parent ancestry walk used by restoration
//! - `format`: textual rendering of a single commit

pub mod format;
pub mod rev_list;
