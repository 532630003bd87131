//! Type definitions for `cycle_core`.
//!
//! Node ids, neighbor pairs, paths and the candidate selection policy.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ID newtypes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The two neighbors of a node. Order matters: walks pick a direction by index.
pub type Neighbors = [NodeId; 2];

// ---------------------------------------------------------------------------
// Walk direction and selection
// ---------------------------------------------------------------------------

/// Which neighbor of the start node a candidate walk steps to first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    First,
    Second,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::First, Direction::Second];

    pub fn index(self) -> usize {
        match self {
            Direction::First => 0,
            Direction::Second => 1,
        }
    }
}

/// How the two candidate walks are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Compare by allocated capacity. Both walks share one capacity, so the
    /// first direction always wins and unreached slots are kept.
    Capacity,
    /// Trim each walk at the end node and keep the shorter one.
    #[default]
    Trimmed,
}

// ---------------------------------------------------------------------------
// Path
// ---------------------------------------------------------------------------

/// An ordered run of stops from the start node. A slot is `None` when the walk
/// ran out before filling it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    slots: Vec<Option<NodeId>>,
}

impl Path {
    pub fn from_nodes(nodes: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            slots: nodes.into_iter().map(Some).collect(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub(crate) fn set(&mut self, index: usize, node: NodeId) {
        self.slots[index] = Some(node);
    }

    /// Number of slots, filled or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<NodeId>] {
        &self.slots
    }

    /// Filled stops in order, skipping unset slots.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.slots.iter().flatten()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The prefix ending at the first occurrence of `end`, or `None` if the
    /// path never visits it.
    pub fn trimmed_to(&self, end: &NodeId) -> Option<Path> {
        let position = self
            .slots
            .iter()
            .position(|slot| slot.as_ref() == Some(end))?;
        Some(Self {
            slots: self.slots[..=position].to_vec(),
        })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if let Some(node) = slot {
                f.write_str(node.as_str())?;
            }
        }
        f.write_str("]")
    }
}

/// Renders a path as `[A, C, B]`, an empty one as `[]` and a missing one as
/// `null`.
pub fn render_path(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.to_string(),
        None => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(labels: &[&str]) -> Vec<NodeId> {
        labels.iter().map(|&l| NodeId::from(l)).collect()
    }

    #[test]
    fn renders_full_path() {
        let path = Path::from_nodes(nodes(&["A", "C", "B"]));
        assert_eq!(render_path(Some(&path)), "[A, C, B]");
    }

    #[test]
    fn renders_empty_and_missing() {
        assert_eq!(render_path(Some(&Path::default())), "[]");
        assert_eq!(render_path(None), "null");
    }

    #[test]
    fn unset_slots_render_as_empty_segments() {
        let mut path = Path::with_capacity(3);
        path.set(0, NodeId::from("A"));
        path.set(1, NodeId::from("Z"));
        assert_eq!(path.to_string(), "[A, Z, ]");
        assert_eq!(path.slots()[2], None);
        assert!(!path.is_complete());
        assert_eq!(path.nodes().count(), 2);
    }

    #[test]
    fn trimmed_to_cuts_at_first_visit() {
        let path = Path::from_nodes(nodes(&["A", "B", "C", "B"]));
        let trimmed = path.trimmed_to(&NodeId::from("B")).unwrap();
        assert_eq!(trimmed.to_string(), "[A, B]");
        assert!(path.trimmed_to(&NodeId::from("Q")).is_none());
    }

    #[test]
    fn selection_defaults_to_trimmed_and_uses_snake_case() {
        assert_eq!(Selection::default(), Selection::Trimmed);
        let parsed: Selection = serde_json::from_str("\"capacity\"").unwrap();
        assert_eq!(parsed, Selection::Capacity);
    }
}
