//! Shared test fixtures for `cycle_core` and downstream crates.
//!
//! Graphs are built directly from label tables and skip validation, so
//! fixtures can describe malformed or disconnected shapes too.

use crate::{CycleGraph, NodeId, EXAMPLE_NODES};

pub fn graph_from(table: &[(&str, [&str; 2])]) -> CycleGraph {
    table
        .iter()
        .map(|&(label, [first, second])| {
            (NodeId::from(label), [NodeId::from(first), NodeId::from(second)])
        })
        .collect()
}

/// A-C-B / A-D-E-B, five nodes.
pub fn example_graph() -> CycleGraph {
    graph_from(&EXAMPLE_NODES)
}

/// A four-node ring where A reaches C in two steps either way.
pub fn square_graph() -> CycleGraph {
    graph_from(&[
        ("A", ["B", "D"]),
        ("B", ["A", "C"]),
        ("C", ["B", "D"]),
        ("D", ["A", "C"]),
    ])
}

/// A five-node ring S-X-P-E-Y plus a separate U-V-W ring. From S, the second
/// direction reaches E one stop sooner than the first.
pub fn shortcut_graph() -> CycleGraph {
    graph_from(&[
        ("S", ["X", "Y"]),
        ("X", ["S", "P"]),
        ("P", ["X", "E"]),
        ("E", ["P", "Y"]),
        ("Y", ["S", "E"]),
        ("U", ["V", "W"]),
        ("V", ["W", "U"]),
        ("W", ["U", "V"]),
    ])
}

/// Two nodes that each list the other as both neighbors.
pub fn two_cycle_graph() -> CycleGraph {
    graph_from(&[("A", ["B", "B"]), ("B", ["A", "A"])])
}

/// A's first neighbor Z is not a node.
pub fn dangling_graph() -> CycleGraph {
    graph_from(&[
        ("A", ["Z", "C"]),
        ("C", ["A", "D"]),
        ("D", ["C", "E"]),
        ("E", ["D", "A"]),
    ])
}
