//! # Flat: depth-first projection of a state tree
//!
//! Useful for simple iteration, flat JSON export and the text rendering.

use crate::level::band_name;
use crate::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatState {
    pub depth: usize,
    pub level: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(rename = "override", default, skip_serializing_if = "crate::state::is_false")]
    pub override_applied: bool,
}

impl State {
    /// Pre-order entries, one per node; the root is at depth 0.
    pub fn flatten(&self) -> Vec<FlatState> {
        let mut list = Vec::with_capacity(self.node_count());
        flatten_into(self, 0, &mut list);
        list
    }

    /// Indented text view. Call [`aggregate_levels`](Self::aggregate_levels)
    /// first if parent levels should reflect their children.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn flatten_into(state: &State, depth: usize, list: &mut Vec<FlatState>) {
    list.push(FlatState {
        depth,
        level: state.level,
        source: state.source.clone(),
        message: state.message.clone(),
        override_applied: state.override_applied,
    });

    for child in state.children().unwrap_or_default() {
        flatten_into(child, depth + 1, list);
    }
}

impl fmt::Display for FlatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:indent$}", "", indent = self.depth * 2)?;
        if !self.source.is_empty() {
            write!(f, "- [{}]: ", self.source)?;
        }
        write!(f, "{} {}", self.level, band_name(self.level))?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.flatten() {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}
