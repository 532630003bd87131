use tracing::debug;

use crate::path::find_minimum_stop_path;
use crate::{render_path, CycleGraph, GraphBuilder, GraphError, NodeId, Path, PathError, Selection};

/// The fixed example graph, inserted in this order:
///
/// ```text
/// A - C - B
/// |     /
/// D - E
/// ```
pub const EXAMPLE_NODES: [(&str, [&str; 2]); 5] = [
    ("A", ["C", "D"]),
    ("B", ["C", "E"]),
    ("C", ["A", "B"]),
    ("D", ["A", "E"]),
    ("E", ["D", "B"]),
];
pub const EXAMPLE_START: &str = "A";
pub const EXAMPLE_END: &str = "B";

/// A graph with a chosen start and end node, ready to be queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    graph: CycleGraph,
    start: NodeId,
    end: NodeId,
    selection: Selection,
}

impl Session {
    /// Fails if the graph is empty, or if `start` or `end` is empty or not a
    /// node of the graph. Neighbor pairs are not inspected.
    pub fn new(
        graph: CycleGraph,
        start: impl Into<NodeId>,
        end: impl Into<NodeId>,
    ) -> Result<Self, GraphError> {
        let start = start.into();
        let end = end.into();
        if graph.is_empty() {
            return Err(GraphError::invalid("graph has no nodes"));
        }
        for (role, node) in [("start", &start), ("end", &end)] {
            if node.is_empty() {
                return Err(GraphError::invalid(format!("{role} node label is empty")));
            }
            if !graph.contains(node) {
                return Err(GraphError::invalid(format!(
                    "{role} node '{node}' is not in the graph"
                )));
            }
        }
        debug!(nodes = graph.len(), %start, %end, "session created");
        Ok(Self {
            graph,
            start,
            end,
            selection: Selection::default(),
        })
    }

    /// The five-node example from [`EXAMPLE_NODES`], going from A to B.
    pub fn example() -> Result<Self, GraphError> {
        let mut builder = GraphBuilder::new();
        for (label, neighbors) in EXAMPLE_NODES {
            builder.add_node(label, &neighbors)?;
        }
        Self::new(builder.build(), EXAMPLE_START, EXAMPLE_END)
    }

    #[must_use]
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn graph(&self) -> &CycleGraph {
        &self.graph
    }

    pub fn start(&self) -> &NodeId {
        &self.start
    }

    pub fn end(&self) -> &NodeId {
        &self.end
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn minimum_stop_path(&self) -> Result<Path, PathError> {
        find_minimum_stop_path(&self.graph, &self.start, &self.end, self.selection)
    }

    /// Rendered form of [`Session::minimum_stop_path`]; `null` when no path
    /// was found.
    pub fn minimum_stop_path_string(&self) -> String {
        match self.minimum_stop_path() {
            Ok(path) => render_path(Some(&path)),
            Err(err) => {
                debug!(%err, "rendering missing path");
                render_path(None)
            }
        }
    }
}
