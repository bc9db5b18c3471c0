//! # Merge: applying override documents
//!
//! An override document has the same shape as a state tree. Applying it may
//! change `level`, `message` and `override_applied` on existing nodes, but it
//! never adds or removes nodes: an override must not turn something into a
//! tree that is not supposed to be one. Override children that match nothing
//! are ignored.
//!
//! The level/message replacement fires when the override's `source` differs
//! from the node's. Descent already narrows non-wildcard override children to
//! nodes with an equal source, so in practice only wildcard entries (and a
//! root with a different source) replace values. Existing override documents
//! rely on this behaviour; do not change it without checking with their owners.

use crate::state::State;
use tracing::debug;

/// Override source matching every sibling at its position.
pub const WILDCARD_SOURCE: &str = "*";

impl State {
    /// Merges `overrides` into this tree in place. `None` is a no-op.
    pub fn apply(&mut self, overrides: Option<&State>) -> &mut Self {
        let Some(overrides) = overrides else {
            return self;
        };

        if overrides.source != self.source {
            debug!(
                source = %self.source,
                from = self.level,
                to = overrides.level,
                "override replaces level"
            );
            self.override_applied = true;
            self.level = overrides.level;
            self.message = overrides.message.clone();
        }

        // Both sides must already be containers to descend.
        if let (Some(override_tree), Some(tree)) = (overrides.tree.as_ref(), self.tree.as_mut()) {
            for override_child in override_tree {
                let wildcard = override_child.source == WILDCARD_SOURCE;
                for child in tree
                    .iter_mut()
                    .filter(|child| wildcard || child.source == override_child.source)
                {
                    child.apply(Some(override_child));
                }
            }
        }

        self
    }
}
