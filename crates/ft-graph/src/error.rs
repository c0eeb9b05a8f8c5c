//! Network-specific error types.

use ft_core::{ArcId, FtError, Real};

pub type GraphResult<T> = Result<T, GraphError>;

/// Why a network could not be constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidNetwork {
    /// Fewer than two nodes: source and sink would coincide.
    TooFewNodes { count: usize },

    /// Node count does not fit the compact id space.
    TooManyNodes { count: usize },

    /// An arc endpoint lies outside `[0, node_count)`.
    EndpointOutOfRange {
        arc: usize,
        node: usize,
        node_count: usize,
    },

    /// An arc was given a negative capacity.
    NegativeCapacity { arc: usize, capacity: Real },

    /// An arc was given a NaN or infinite capacity.
    NonFiniteCapacity { arc: usize, capacity: Real },

    /// The residual tolerance is negative or not finite.
    BadTolerance { tolerance: Real },

    /// Adjacency offsets disagree with the arc list.
    InconsistentAdjacency { node: usize },
}

/// Network construction, flow update and index assignment errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Malformed construction input.
    InvalidNetwork(InvalidNetwork),

    /// A flow update would leave `[0, capacity]`.
    CapacityExceeded {
        arc: ArcId,
        flow: Real,
        amount: Real,
        capacity: Real,
    },

    /// Arc id does not belong to this network.
    ArcNotFound { arc: ArcId },

    /// A terminal label is not among the node labels.
    UnknownTerminal { label: String },

    /// A node label appears more than once.
    DuplicateLabel { label: String },

    /// Source and sink were given the same label.
    SameTerminal { label: String },

    /// Label not found in index map.
    UnknownLabel { label: String },
}

impl From<InvalidNetwork> for GraphError {
    fn from(reason: InvalidNetwork) -> Self {
        GraphError::InvalidNetwork(reason)
    }
}

impl std::fmt::Display for InvalidNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidNetwork::TooFewNodes { count } => {
                write!(f, "network needs at least 2 nodes, got {}", count)
            }
            InvalidNetwork::TooManyNodes { count } => {
                write!(f, "network has too many nodes ({})", count)
            }
            InvalidNetwork::EndpointOutOfRange {
                arc,
                node,
                node_count,
            } => write!(
                f,
                "arc {} references node {} outside [0, {})",
                arc, node, node_count
            ),
            InvalidNetwork::NegativeCapacity { arc, capacity } => {
                write!(f, "arc {} has negative capacity {}", arc, capacity)
            }
            InvalidNetwork::NonFiniteCapacity { arc, capacity } => {
                write!(f, "arc {} has non-finite capacity {}", arc, capacity)
            }
            InvalidNetwork::BadTolerance { tolerance } => {
                write!(f, "residual tolerance {} is not a finite value >= 0", tolerance)
            }
            InvalidNetwork::InconsistentAdjacency { node } => {
                write!(f, "residual adjacency of node {} is inconsistent", node)
            }
        }
    }
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidNetwork(reason) => write!(f, "Invalid network: {}", reason),
            GraphError::CapacityExceeded {
                arc,
                flow,
                amount,
                capacity,
            } => write!(
                f,
                "Pushing {} on arc {} (flow {}) leaves [0, {}]",
                amount, arc, flow, capacity
            ),
            GraphError::ArcNotFound { arc } => write!(f, "Arc {} not found", arc),
            GraphError::UnknownTerminal { label } => {
                write!(f, "Terminal '{}' is not a node label", label)
            }
            GraphError::DuplicateLabel { label } => {
                write!(f, "Node label '{}' appears more than once", label)
            }
            GraphError::SameTerminal { label } => {
                write!(f, "Source and sink are both '{}'", label)
            }
            GraphError::UnknownLabel { label } => {
                write!(f, "Label '{}' not found in index map", label)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for FtError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::CapacityExceeded { .. } | GraphError::ArcNotFound { .. } => {
                FtError::Invariant {
                    what: err.to_string(),
                }
            }
            other => FtError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}
