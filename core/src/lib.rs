//! # statetree-core
//!
//! Hierarchical health report of a module and its sub-components: a tree of
//! [`State`] nodes, each carrying a severity level and optional message.
//!
//! A reporting cycle builds the tree top-down, merges an operator's override
//! document with [`State::apply`], rolls levels up with
//! [`State::aggregate_levels`] and then serializes or renders the result.

pub mod error;
pub mod flat;
pub mod level;
pub mod merge;
pub mod state;

pub use error::{StateError, StateResult};
pub use flat::FlatState;
pub use level::{Band, band_name};
pub use merge::WILDCARD_SOURCE;
pub use state::State;
