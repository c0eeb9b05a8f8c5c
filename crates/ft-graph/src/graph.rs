//! Core network data structures.

use ft_core::{ArcId, NodeId, Real, has_room, snap_slack};

use crate::error::{GraphError, GraphResult};

/// Which way a residual arc runs relative to its underlying arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Along the arc: residual is `capacity - flow`.
    Forward,
    /// Against the arc: residual is `flow` (cancellation).
    Backward,
}

/// One direction of an arc in the residual graph.
///
/// The reverse of a residual arc is the same arc with the other direction,
/// so reverse lookup never touches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResidualArc {
    pub arc: ArcId,
    pub direction: Direction,
}

impl ResidualArc {
    pub fn forward(arc: ArcId) -> Self {
        Self {
            arc,
            direction: Direction::Forward,
        }
    }

    pub fn backward(arc: ArcId) -> Self {
        Self {
            arc,
            direction: Direction::Backward,
        }
    }

    /// The opposite direction of the same arc.
    pub fn reverse(self) -> Self {
        let direction = match self.direction {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        };
        Self {
            arc: self.arc,
            direction,
        }
    }
}

/// A directed capacitated arc carrying flow.
///
/// Capacity is fixed at construction; flow only changes through
/// [`Network::push_flow`].
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub id: ArcId,
    pub source: NodeId,
    pub target: NodeId,
    pub capacity: Real,
    pub(crate) flow: Real,
}

impl Arc {
    /// Current flow on the arc.
    pub fn flow(&self) -> Real {
        self.flow
    }

    /// Remaining forward capacity.
    pub fn spare(&self) -> Real {
        self.capacity - self.flow
    }
}

/// The flow network: nodes `0..N`, arcs, and residual adjacency.
///
/// The network stores:
/// - All arcs in insertion order (indexed by their IDs).
/// - Compact residual adjacency: for each node, the residual arcs leaving it,
///   ordered by arc insertion order (forward before backward for the same arc).
///
/// Node 0 is the source and node N-1 the sink.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) node_count: usize,
    pub(crate) arcs: Vec<Arc>,

    /// Node i's residual arcs are in residual_arcs[residual_offsets[i]..residual_offsets[i+1]].
    pub(crate) residual_offsets: Vec<usize>,
    pub(crate) residual_arcs: Vec<ResidualArc>,

    pub(crate) tolerance: Real,
}

impl Network {
    /// Build a network from plain `(source, target, capacity)` triples.
    pub fn from_arcs(node_count: usize, arcs: &[(usize, usize, Real)]) -> GraphResult<Self> {
        let mut builder = crate::NetworkBuilder::new(node_count);
        for &(source, target, capacity) in arcs {
            builder.add_arc(source, target, capacity);
        }
        builder.build()
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn source(&self) -> NodeId {
        NodeId::from_index(0)
    }

    pub fn sink(&self) -> NodeId {
        NodeId::from_index(self.node_count as u32 - 1)
    }

    /// Tolerance under which a residual counts as exhausted.
    pub fn tolerance(&self) -> Real {
        self.tolerance
    }

    /// Return all arcs in insertion order.
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Get an arc by ID (returns None if ID out of bounds).
    pub fn arc(&self, id: ArcId) -> Option<&Arc> {
        self.arcs.get(id.idx())
    }

    /// Residual arcs leaving a node.
    pub fn residual_arcs(&self, node: NodeId) -> &[ResidualArc] {
        let idx = node.idx();
        if idx >= self.node_count {
            return &[];
        }
        let start = self.residual_offsets[idx];
        let end = self.residual_offsets[idx + 1];
        &self.residual_arcs[start..end]
    }

    /// Node a residual arc starts from.
    pub fn tail(&self, residual: ResidualArc) -> GraphResult<NodeId> {
        let arc = self.arc_or_err(residual.arc)?;
        Ok(match residual.direction {
            Direction::Forward => arc.source,
            Direction::Backward => arc.target,
        })
    }

    /// Node a residual arc leads to.
    pub fn head(&self, residual: ResidualArc) -> GraphResult<NodeId> {
        let arc = self.arc_or_err(residual.arc)?;
        Ok(match residual.direction {
            Direction::Forward => arc.target,
            Direction::Backward => arc.source,
        })
    }

    /// `capacity - flow` forward, `flow` backward.
    pub fn residual_capacity(&self, residual: ResidualArc) -> GraphResult<Real> {
        let arc = self.arc_or_err(residual.arc)?;
        Ok(match residual.direction {
            Direction::Forward => arc.spare(),
            Direction::Backward => arc.flow,
        })
    }

    /// Whether more flow can move along a residual arc.
    pub fn has_residual(&self, residual: ResidualArc) -> bool {
        self.residual_capacity(residual)
            .map(|r| has_room(r, self.tolerance))
            .unwrap_or(false)
    }

    /// Add a signed amount to an arc's flow.
    ///
    /// A push that consumes the whole forward residual lands exactly on
    /// `capacity`, and one that cancels the whole flow lands exactly on `0`.
    /// Other results within [`snap_slack`] of a bound are snapped onto it.
    /// On error the flow is left unchanged.
    pub fn push_flow(&mut self, id: ArcId, amount: Real) -> GraphResult<()> {
        let tolerance = self.tolerance;
        let arc = self
            .arcs
            .get_mut(id.idx())
            .ok_or(GraphError::ArcNotFound { arc: id })?;

        let slack = snap_slack(tolerance, arc.capacity);
        let mut next = if amount > 0.0 && amount >= arc.spare() && amount - arc.spare() <= slack {
            arc.capacity
        } else if amount < 0.0 && -amount >= arc.flow && -amount - arc.flow <= slack {
            0.0
        } else {
            arc.flow + amount
        };
        if next < 0.0 && next >= -slack {
            next = 0.0;
        }
        if next > arc.capacity && next - arc.capacity <= slack {
            next = arc.capacity;
        }
        if !next.is_finite() || next < 0.0 || next > arc.capacity {
            return Err(GraphError::CapacityExceeded {
                arc: id,
                flow: arc.flow,
                amount,
                capacity: arc.capacity,
            });
        }

        arc.flow = next;
        Ok(())
    }

    /// Move `amount` along a residual arc: raise flow forward, cancel it backward.
    pub fn augment(&mut self, residual: ResidualArc, amount: Real) -> GraphResult<()> {
        match residual.direction {
            Direction::Forward => self.push_flow(residual.arc, amount),
            Direction::Backward => self.push_flow(residual.arc, -amount),
        }
    }

    /// Total flow on arcs leaving a node.
    pub fn outflow(&self, node: NodeId) -> Real {
        self.arcs
            .iter()
            .filter(|a| a.source == node)
            .map(|a| a.flow)
            .sum()
    }

    /// Total flow on arcs entering a node.
    pub fn inflow(&self, node: NodeId) -> Real {
        self.arcs
            .iter()
            .filter(|a| a.target == node)
            .map(|a| a.flow)
            .sum()
    }

    /// Net flow leaving the source: the value of the current flow.
    pub fn flow_value(&self) -> Real {
        let source = self.source();
        self.outflow(source) - self.inflow(source)
    }

    fn arc_or_err(&self, id: ArcId) -> GraphResult<&Arc> {
        self.arc(id).ok_or(GraphError::ArcNotFound { arc: id })
    }
}
