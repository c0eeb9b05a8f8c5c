//! Incremental network builder.

use ft_core::{ArcId, DEFAULT_RESIDUAL_TOLERANCE, NodeId, Real};

use crate::error::GraphResult;
use crate::graph::{Arc, Network, ResidualArc};
use crate::validate;

/// Arc as supplied by the caller, before validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RawArc {
    pub source: usize,
    pub target: usize,
    pub capacity: Real,
}

/// Builder for constructing a network incrementally.
///
/// Use `add_arc` to collect arcs, then call `build()` to validate and freeze
/// them into a `Network` with zero flow everywhere. Nothing is checked until
/// `build()`, and a failed build leaves no network behind.
#[derive(Debug)]
pub struct NetworkBuilder {
    node_count: usize,
    arcs: Vec<RawArc>,
    tolerance: Real,
}

impl NetworkBuilder {
    /// Create a builder for a network with `node_count` nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            arcs: Vec::new(),
            tolerance: DEFAULT_RESIDUAL_TOLERANCE,
        }
    }

    /// Override the tolerance under which residual capacity counts as exhausted.
    pub fn residual_tolerance(mut self, tolerance: Real) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Add an arc and return the ID it will have once built.
    pub fn add_arc(&mut self, source: usize, target: usize, capacity: Real) -> ArcId {
        let id = ArcId::from_index(self.arcs.len() as u32);
        self.arcs.push(RawArc {
            source,
            target,
            capacity,
        });
        id
    }

    /// Number of arcs added so far.
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Build and validate the network.
    pub fn build(self) -> GraphResult<Network> {
        validate::validate_structure(self.node_count, &self.arcs, self.tolerance)?;

        let arcs: Vec<Arc> = self
            .arcs
            .iter()
            .enumerate()
            .map(|(i, raw)| Arc {
                id: ArcId::from_index(i as u32),
                source: NodeId::from_index(raw.source as u32),
                target: NodeId::from_index(raw.target as u32),
                capacity: raw.capacity,
                flow: 0.0,
            })
            .collect();

        let (residual_offsets, residual_arcs) = Self::build_adjacency(self.node_count, &arcs);

        validate::validate_adjacency(self.node_count, &arcs, &residual_offsets, &residual_arcs)?;

        Ok(Network {
            node_count: self.node_count,
            arcs,
            residual_offsets,
            residual_arcs,
            tolerance: self.tolerance,
        })
    }

    /// Build compact residual adjacency: for each node, the residual arcs leaving it.
    ///
    /// Arcs are visited in insertion order, so each node's list is ordered by
    /// arc ID with the forward entry ahead of the backward one for self-loops.
    fn build_adjacency(node_count: usize, arcs: &[Arc]) -> (Vec<usize>, Vec<ResidualArc>) {
        let mut degree = vec![0_usize; node_count];
        for arc in arcs {
            degree[arc.source.idx()] += 1;
            degree[arc.target.idx()] += 1;
        }

        let mut offsets = Vec::with_capacity(node_count + 1);
        offsets.push(0);
        for d in &degree {
            let last = offsets[offsets.len() - 1];
            offsets.push(last + d);
        }

        let mut cursor = offsets[..node_count].to_vec();
        let mut flat = vec![ResidualArc::forward(ArcId::from_index(0)); 2 * arcs.len()];
        for arc in arcs {
            let s = arc.source.idx();
            flat[cursor[s]] = ResidualArc::forward(arc.id);
            cursor[s] += 1;

            let t = arc.target.idx();
            flat[cursor[t]] = ResidualArc::backward(arc.id);
            cursor[t] += 1;
        }

        (offsets, flat)
    }
}
