//! Merge support
//!
//! - `resolution`: caller-supplied per-file conflict resolutions
//! - `merge_plan`: union of two tracked sets with resolutions applied

pub mod merge_plan;
pub mod resolution;
