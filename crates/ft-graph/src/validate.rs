//! Network validation logic.

use ft_core::Real;

use crate::builder::RawArc;
use crate::error::{GraphResult, InvalidNetwork};
use crate::graph::{Arc, Direction, ResidualArc};

/// Validate builder input: node count, endpoints, capacities, tolerance.
pub(crate) fn validate_structure(
    node_count: usize,
    arcs: &[RawArc],
    tolerance: Real,
) -> GraphResult<()> {
    if node_count < 2 {
        return Err(InvalidNetwork::TooFewNodes { count: node_count }.into());
    }
    if node_count >= u32::MAX as usize {
        return Err(InvalidNetwork::TooManyNodes { count: node_count }.into());
    }

    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(InvalidNetwork::BadTolerance { tolerance }.into());
    }

    for (i, arc) in arcs.iter().enumerate() {
        for node in [arc.source, arc.target] {
            if node >= node_count {
                return Err(InvalidNetwork::EndpointOutOfRange {
                    arc: i,
                    node,
                    node_count,
                }
                .into());
            }
        }

        if !arc.capacity.is_finite() {
            return Err(InvalidNetwork::NonFiniteCapacity {
                arc: i,
                capacity: arc.capacity,
            }
            .into());
        }
        if arc.capacity < 0.0 {
            return Err(InvalidNetwork::NegativeCapacity {
                arc: i,
                capacity: arc.capacity,
            }
            .into());
        }
    }

    Ok(())
}

/// Validate residual adjacency for consistency.
pub(crate) fn validate_adjacency(
    node_count: usize,
    arcs: &[Arc],
    residual_offsets: &[usize],
    residual_arcs: &[ResidualArc],
) -> GraphResult<()> {
    if residual_offsets.len() != node_count + 1
        || residual_offsets[node_count] != residual_arcs.len()
        || residual_arcs.len() != 2 * arcs.len()
    {
        return Err(InvalidNetwork::InconsistentAdjacency { node: 0 }.into());
    }

    for node in 0..node_count {
        let start = residual_offsets[node];
        let end = residual_offsets[node + 1];
        if start > end {
            return Err(InvalidNetwork::InconsistentAdjacency { node }.into());
        }

        let mut previous = None;
        for residual in &residual_arcs[start..end] {
            let Some(arc) = arcs.get(residual.arc.idx()) else {
                return Err(InvalidNetwork::InconsistentAdjacency { node }.into());
            };

            // Residual arc must leave this node
            let tail = match residual.direction {
                Direction::Forward => arc.source,
                Direction::Backward => arc.target,
            };
            if tail.idx() != node {
                return Err(InvalidNetwork::InconsistentAdjacency { node }.into());
            }

            // Insertion order drives BFS tie-breaking
            let key = (residual.arc, residual.direction);
            if previous.is_some_and(|p| p >= key) {
                return Err(InvalidNetwork::InconsistentAdjacency { node }.into());
            }
            previous = Some(key);
        }
    }

    Ok(())
}
