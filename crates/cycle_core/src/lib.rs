//! `cycle_core` — minimum-stop paths on graphs where every node has two
//! neighbors.
//!
//! No IO. Each query walks the cycle both ways from the start node and keeps
//! the shorter walk.

mod error;
mod graph;
mod path;
mod session;
mod types;

#[cfg(any(test, feature = "test-support"))]
pub mod test_fixtures;

pub use error::{GraphError, PathError};
pub use graph::{CycleGraph, GraphBuilder};
pub use path::{find_minimum_stop_path, walk_capacity, walk_from};
pub use session::{Session, EXAMPLE_END, EXAMPLE_NODES, EXAMPLE_START};
pub use types::*;
