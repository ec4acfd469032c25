//! Core repository components
//!
//! This module contains the stateful building blocks of a repository:
//!
//! - `branches`: Branch table and the current-branch pointer
//! - `graph`: Append-only commit arena with id lookups and ancestry walks
//! - `repository`: Top-level aggregate owning everything below
//! - `snapshots`: Snapshot store collaborator (file content per commit)
//! - `workspace`: Reachability probes and content reads in the working directory

pub mod branches;
pub mod graph;
pub mod repository;
pub mod snapshots;
pub mod workspace;
