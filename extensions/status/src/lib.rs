//! # statetree Status
//!
//! Runs the reporting cycle around a [`statetree_core::State`] tree.
//!
//! ## Key concepts
//!
//! - **state_override.json**: operator override document, by default under `/etc/<module>/`
//! - **state.json**: aggregated tree as served on `/state/`
//! - **state.txt**: indented text rendering of the same tree

pub mod config;
pub mod error;
pub mod generator;
pub mod overrides;
pub mod report;

pub use config::StatusConfig;
pub use error::{StatusError, StatusResult};
pub use generator::{GeneratedFiles, SnapshotGenerator};
pub use overrides::OverrideLoader;
pub use report::{Reporter, StateReport};
