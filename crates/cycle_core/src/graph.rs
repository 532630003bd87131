use std::collections::{hash_map, HashMap};

use serde::{Deserialize, Serialize};

use crate::{GraphError, Neighbors, NodeId};

/// Adjacency store for a graph whose nodes each have exactly two neighbors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CycleGraph {
    nodes: HashMap<NodeId, Neighbors>,
}

impl CycleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the neighbors of `node`, returning the old pair.
    pub fn insert(&mut self, node: NodeId, neighbors: Neighbors) -> Option<Neighbors> {
        self.nodes.insert(node, neighbors)
    }

    pub fn neighbors(&self, node: &NodeId) -> Option<&Neighbors> {
        self.nodes.get(node)
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, NodeId, Neighbors> {
        self.nodes.iter()
    }

    /// Checks the whole graph once: every pair holds two distinct non-empty
    /// labels, no node is its own neighbor, and every neighbor is a node.
    ///
    /// Nodes are visited in label order so the reported violation is stable.
    pub fn validate_structure(&self) -> Result<(), GraphError> {
        if self.is_empty() {
            return Err(GraphError::invalid("graph has no nodes"));
        }
        let mut labels: Vec<&NodeId> = self.nodes.keys().collect();
        labels.sort();
        for node in labels {
            let [first, second] = &self.nodes[node];
            check_pair(node, first, second)?;
            if first == node || second == node {
                return Err(GraphError::invalid(format!(
                    "node '{node}' lists itself as a neighbor"
                )));
            }
            for neighbor in [first, second] {
                if !self.contains(neighbor) {
                    return Err(GraphError::invalid(format!(
                        "node '{node}' references unknown neighbor '{neighbor}'"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CycleGraph {
    type Item = (&'a NodeId, &'a Neighbors);
    type IntoIter = hash_map::Iter<'a, NodeId, Neighbors>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(NodeId, Neighbors)> for CycleGraph {
    fn from_iter<I: IntoIterator<Item = (NodeId, Neighbors)>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

fn check_pair(node: &NodeId, first: &NodeId, second: &NodeId) -> Result<(), GraphError> {
    if first.is_empty() || second.is_empty() {
        return Err(GraphError::invalid(format!(
            "node '{node}' has an empty neighbor label"
        )));
    }
    if first == second {
        return Err(GraphError::invalid(format!(
            "node '{node}' lists '{first}' as both neighbors"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Populates a [`CycleGraph`] one node at a time, validating each insertion.
///
/// A node may list itself as a neighbor only when it is the start node given
/// to [`GraphBuilder::with_start`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: CycleGraph,
    start: Option<NodeId>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(start: impl Into<NodeId>) -> Self {
        Self {
            graph: CycleGraph::new(),
            start: Some(start.into()),
        }
    }

    pub fn add_node<S: AsRef<str>>(
        &mut self,
        label: &str,
        neighbors: &[S],
    ) -> Result<&mut Self, GraphError> {
        if label.is_empty() {
            return Err(GraphError::invalid("node label is empty"));
        }
        let [first, second] = neighbors else {
            return Err(GraphError::invalid(format!(
                "node '{label}' needs exactly two neighbors, got {}",
                neighbors.len()
            )));
        };
        let node = NodeId::from(label);
        let first = NodeId::from(first.as_ref());
        let second = NodeId::from(second.as_ref());
        check_pair(&node, &first, &second)?;

        let is_start = self.start.as_ref() == Some(&node);
        if !is_start && (first == node || second == node) {
            return Err(GraphError::invalid(format!(
                "node '{label}' lists itself as a neighbor"
            )));
        }

        self.graph.insert(node, [first, second]);
        Ok(self)
    }

    pub fn build(self) -> CycleGraph {
        self.graph
    }
}
