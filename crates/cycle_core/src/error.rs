use thiserror::Error;

use crate::NodeId;

/// Raised while building a graph or a session from malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GraphError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GraphError::InvalidArgument(reason.into())
    }
}

/// Raised by a query when neither candidate walk reaches the end node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("no path from '{start}' to '{end}' within {capacity} stops")]
    NotFound {
        start: NodeId,
        end: NodeId,
        capacity: usize,
    },
}
