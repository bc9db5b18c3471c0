//! # State: the status tree node
//!
//! A [`State`] reports the condition of one component. Its `tree` holds the
//! sub-components in a caller-chosen order; `source` must be unique among
//! siblings. An empty `source` semantically refers to the parent.
//!
//! `tree` distinguishes a pure leaf (`None`) from a container that happens to
//! have no children (`Some(vec![])`). Aggregation and override descent only
//! treat the latter as a container.

use crate::error::{StateError, StateResult};
use crate::level::Band;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub level: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree: Option<Vec<State>>,
    /// Set once an override document replaced this node's level and message.
    #[serde(rename = "override", default, skip_serializing_if = "is_false")]
    pub override_applied: bool,
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

impl State {
    /// Fresh leaf at level 0 with no message.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    /// A node that is a container from the start, even before any child is added.
    pub fn container(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            tree: Some(Vec::new()),
            ..Default::default()
        }
    }

    /// Overwrites level and message.
    ///
    /// Meant for leaves only: on a node with a tree, the next
    /// [`aggregate_levels`](Self::aggregate_levels) replaces whatever was set here.
    pub fn set(&mut self, level: i64, message: impl Into<String>) -> &mut Self {
        self.level = level;
        self.message = message.into();
        self
    }

    /// Appends children in the given order.
    pub fn add(&mut self, children: impl IntoIterator<Item = State>) -> &mut Self {
        for child in children {
            self.tree.get_or_insert_with(Vec::new).push(child);
        }
        self
    }

    pub fn push(&mut self, child: State) -> &mut Self {
        self.add([child])
    }

    pub fn with_level(mut self, level: i64, message: impl Into<String>) -> Self {
        self.set(level, message);
        self
    }

    pub fn with_child(mut self, child: State) -> Self {
        self.push(child);
        self
    }

    pub fn children(&self) -> Option<&[State]> {
        self.tree.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.tree.is_none()
    }

    pub fn band(&self) -> Band {
        Band::of(self.level)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .map(|tree| tree.iter().map(State::node_count).sum::<usize>())
            .unwrap_or(0)
    }

    /// Descends one tree level per path element, matching `source` exactly.
    /// Duplicate sources resolve to the first match in tree order.
    pub fn find_by_source<S: AsRef<str>>(&self, path: &[S]) -> Option<&State> {
        let (first, rest) = path.split_first()?;
        let child = self
            .children()?
            .iter()
            .find(|child| child.source == first.as_ref())?;

        if rest.is_empty() {
            Some(child)
        } else {
            child.find_by_source(rest)
        }
    }

    pub fn find_by_source_mut<S: AsRef<str>>(&mut self, path: &[S]) -> Option<&mut State> {
        let (first, rest) = path.split_first()?;
        let child = self
            .tree
            .as_mut()?
            .iter_mut()
            .find(|child| child.source == first.as_ref())?;

        if rest.is_empty() {
            Some(child)
        } else {
            child.find_by_source_mut(rest)
        }
    }

    /// Recomputes every container's level as the worst level among its direct
    /// children, bottom-up. Leaves keep their own level; an empty container
    /// drops to 0.
    pub fn aggregate_levels(&mut self) -> &mut Self {
        if let Some(tree) = self.tree.as_mut() {
            let mut max_level = 0;
            for child in tree.iter_mut() {
                child.aggregate_levels();
                max_level = max_level.max(child.level);
            }
            self.level = max_level;
        }
        self
    }

    pub fn from_json(document: &str) -> StateResult<Self> {
        serde_json::from_str(document).map_err(StateError::Decode)
    }

    pub fn from_json_slice(document: &[u8]) -> StateResult<Self> {
        serde_json::from_slice(document).map_err(StateError::Decode)
    }

    pub fn to_json(&self) -> StateResult<String> {
        serde_json::to_string(self).map_err(StateError::Encode)
    }

    pub fn to_json_pretty(&self) -> StateResult<String> {
        serde_json::to_string_pretty(self).map_err(StateError::Encode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{ERROR, OK, WARNING};
    use serde_json::json;

    fn sample() -> State {
        let mut root = State::new("module");
        root.add([
            State::new("db").with_level(OK, ""),
            State::new("cache")
                .with_child(State::new("redis").with_level(WARNING, "slow"))
                .with_child(State::new("local").with_level(OK, "")),
        ]);
        root
    }

    #[test]
    fn test_new_is_empty_leaf() {
        let state = State::new("x");
        assert_eq!(state.level, 0);
        assert!(state.message.is_empty());
        assert!(state.is_leaf());
        assert!(!state.override_applied);
    }

    #[test]
    fn test_add_preserves_order_and_chains() {
        let mut root = State::new("");
        root.add([State::new("a"), State::new("b")])
            .push(State::new("c"))
            .set(OK, "ignored after aggregation");

        let sources: Vec<_> = root
            .children()
            .unwrap()
            .iter()
            .map(|c| c.source.as_str())
            .collect();
        assert_eq!(sources, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_add_nothing_keeps_leaf() {
        let mut state = State::new("x");
        state.add(Vec::new());
        assert!(state.is_leaf());
    }

    #[test]
    fn test_find_by_source() {
        let root = sample();
        assert_eq!(root.find_by_source(&["cache", "redis"]).unwrap().level, WARNING);
        assert_eq!(root.find_by_source(&["db"]).unwrap().source, "db");
        assert!(root.find_by_source(&["x", "y"]).is_none());
        assert!(root.find_by_source(&["db", "anything"]).is_none());
        assert!(root.find_by_source::<&str>(&[]).is_none());
    }

    #[test]
    fn test_find_by_source_first_duplicate_wins() {
        let mut root = State::new("");
        root.add([
            State::new("dup").with_level(OK, "first"),
            State::new("dup").with_level(ERROR, "second"),
        ]);
        assert_eq!(root.find_by_source(&["dup"]).unwrap().message, "first");
    }

    #[test]
    fn test_find_by_source_mut() {
        let mut root = sample();
        root.find_by_source_mut(&["cache", "local"])
            .unwrap()
            .set(ERROR, "disk full");
        root.aggregate_levels();
        assert_eq!(root.level, ERROR);
    }

    #[test]
    fn test_aggregate_takes_worst_child() {
        let mut root = sample();
        root.aggregate_levels();
        assert_eq!(root.level, WARNING);
        assert_eq!(root.find_by_source(&["cache"]).unwrap().level, WARNING);
        assert_eq!(root.find_by_source(&["db"]).unwrap().level, OK);
    }

    #[test]
    fn test_aggregate_leaf_unchanged() {
        let mut leaf = State::new("x").with_level(ERROR + 10, "");
        leaf.aggregate_levels();
        assert_eq!(leaf.level, ERROR + 10);
    }

    #[test]
    fn test_aggregate_empty_container_is_zero() {
        let mut state = State::container("x").with_level(ERROR, "set before");
        state.aggregate_levels();
        assert_eq!(state.level, 0);
    }

    #[test]
    fn test_aggregate_negative_children_floor_at_zero() {
        let mut root = State::new("").with_child(State::new("a").with_level(-5, ""));
        root.aggregate_levels();
        assert_eq!(root.level, 0);
    }

    #[test]
    fn test_node_count() {
        assert_eq!(sample().node_count(), 5);
        assert_eq!(State::container("").node_count(), 1);
    }

    #[test]
    fn test_serialization_shape() {
        let mut state = State::new("db").with_level(OK, "");
        state.override_applied = true;
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value, json!({ "level": 200, "source": "db", "override": true }));

        let bare = serde_json::to_value(State::new("")).unwrap();
        assert_eq!(bare, json!({ "level": 0 }));
    }

    #[test]
    fn test_nil_and_empty_tree_are_distinct() {
        let empty = State::from_json(r#"{"level":0,"tree":[]}"#).unwrap();
        assert_eq!(empty.tree, Some(Vec::new()));
        assert_eq!(empty.to_json().unwrap(), r#"{"level":0,"tree":[]}"#);

        let leaf = State::from_json(r#"{"level":0}"#).unwrap();
        assert_eq!(leaf.tree, None);
        assert_eq!(leaf.to_json().unwrap(), r#"{"level":0}"#);
    }

    #[test]
    fn test_json_round_trip() {
        let mut root = sample();
        root.find_by_source_mut(&["db"]).unwrap().override_applied = true;
        let decoded = State::from_json(&root.to_json_pretty().unwrap()).unwrap();
        assert_eq!(decoded, root);
    }

    #[test]
    fn test_invalid_document() {
        let err = State::from_json(r#"{"level":"high"}"#).unwrap_err();
        assert!(matches!(err, StateError::Decode(_)));
    }
}
