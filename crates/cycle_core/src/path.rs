use tracing::{debug, trace, warn};

use crate::{CycleGraph, Direction, NodeId, Path, PathError, Selection};

/// Slots allotted to each candidate walk: half the nodes plus the start.
pub fn walk_capacity(node_count: usize) -> usize {
    node_count / 2 + 1
}

/// Walks from `start` toward `end`, stepping first to the start node's
/// neighbor in `direction` and then always to the current node's second
/// neighbor.
///
/// The walk stops at `end`, at capacity, or on a node missing from the graph.
/// Slots it never reaches stay unset.
pub fn walk_from(
    graph: &CycleGraph,
    start: &NodeId,
    end: &NodeId,
    direction: Direction,
) -> Path {
    let capacity = walk_capacity(graph.len());
    let mut path = Path::with_capacity(capacity);
    path.set(0, start.clone());
    if capacity < 2 {
        return path;
    }

    let Some(neighbors) = graph.neighbors(start) else {
        warn!(%start, "start node is not in the graph");
        return path;
    };
    let mut current = neighbors[direction.index()].clone();
    path.set(1, current.clone());

    let mut filled = 2;
    while current != *end && filled < capacity {
        let Some(neighbors) = graph.neighbors(&current) else {
            warn!(node = %current, "walk stepped onto a node outside the graph");
            break;
        };
        current = neighbors[1].clone();
        trace!(step = filled, node = %current, "walk step");
        path.set(filled, current.clone());
        filled += 1;
    }

    if current == *end {
        debug!(?direction, stops = filled, "walk reached end node");
    } else {
        warn!(?direction, %start, %end, capacity, "walk exhausted before reaching end node");
    }
    path
}

/// Computes both candidate walks and returns the one `selection` prefers.
pub fn find_minimum_stop_path(
    graph: &CycleGraph,
    start: &NodeId,
    end: &NodeId,
    selection: Selection,
) -> Result<Path, PathError> {
    if graph.len() == 1 || (selection == Selection::Trimmed && start == end) {
        return Ok(Path::from_nodes([start.clone()]));
    }

    let [first, second] =
        Direction::BOTH.map(|direction| walk_from(graph, start, end, direction));
    match selection {
        Selection::Capacity => Ok(shorter_by_capacity(first, second)),
        Selection::Trimmed => {
            shorter_trimmed(&first, &second, end).ok_or_else(|| PathError::NotFound {
                start: start.clone(),
                end: end.clone(),
                capacity: walk_capacity(graph.len()),
            })
        }
    }
}

// Ties go to the first direction.
fn shorter_by_capacity(first: Path, second: Path) -> Path {
    if first.len() <= second.len() {
        first
    } else {
        second
    }
}

fn shorter_trimmed(first: &Path, second: &Path, end: &NodeId) -> Option<Path> {
    match (first.trimmed_to(end), second.trimmed_to(end)) {
        (Some(first), Some(second)) => Some(shorter_by_capacity(first, second)),
        (first, second) => first.or(second),
    }
}
