//! Minimum s-t cut read off the final residual graph.

use ft_core::{ArcId, Real};
use ft_graph::Network;

use crate::bfs;
use crate::error::SolverResult;

/// A source/sink partition and the arcs crossing it.
#[derive(Debug, Clone, PartialEq)]
pub struct MinCut {
    /// `true` for nodes on the source side, indexed by node.
    pub source_side: Vec<bool>,
    /// Arcs from the source side to the sink side, in arc order.
    pub cut_arcs: Vec<ArcId>,
    /// Sum of the cut arcs' capacities.
    pub capacity: Real,
}

impl MinCut {
    /// Indices of the source-side nodes.
    pub fn source_nodes(&self) -> Vec<usize> {
        self.source_side
            .iter()
            .enumerate()
            .filter_map(|(i, &s)| s.then_some(i))
            .collect()
    }

    pub fn separates_terminals(&self) -> bool {
        matches!(
            (self.source_side.first(), self.source_side.last()),
            (Some(true), Some(false))
        )
    }
}

/// Partition by residual reachability from the source.
///
/// Once the flow is maximum the sink is unreachable, and the capacity of
/// the returned cut equals the flow value.
pub fn min_cut(network: &Network) -> SolverResult<MinCut> {
    let source_side = bfs::reachable_from_source(network)?;

    let mut cut_arcs = Vec::new();
    let mut capacity = 0.0;
    for arc in network.arcs() {
        if source_side[arc.source.idx()] && !source_side[arc.target.idx()] {
            cut_arcs.push(arc.id);
            capacity += arc.capacity;
        }
    }

    Ok(MinCut {
        source_side,
        cut_arcs,
        capacity,
    })
}
