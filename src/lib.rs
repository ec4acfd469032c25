//! A small single-user version control engine
//!
//! Files are tracked per branch through a seven-state automaton, frozen into
//! an append-only commit graph with checksum-derived ids, and their contents
//! are kept in a snapshot store so branches can be checked out, reset and
//! merged.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logging;
