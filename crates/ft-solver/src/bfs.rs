//! Breadth-first search over the residual graph.

use std::collections::VecDeque;

use ft_core::NodeId;
use ft_graph::{Network, ResidualArc};

use crate::error::SolverResult;

/// BFS tree rooted at the source.
#[derive(Debug, Clone)]
pub struct BfsTree {
    /// Residual arc through which each node was first reached.
    parent: Vec<Option<ResidualArc>>,
    reached: Vec<bool>,
}

impl BfsTree {
    pub fn reached(&self, node: NodeId) -> bool {
        self.reached.get(node.idx()).copied().unwrap_or(false)
    }

    /// Reachability flags indexed by node.
    pub fn into_reached(self) -> Vec<bool> {
        self.reached
    }
}

/// Explore the residual graph from the source.
///
/// Neighbours are visited in residual adjacency order, which follows arc
/// insertion order, so the tree is fully determined by the input. With
/// `stop_at` set, the search ends as soon as that node is discovered.
pub fn search(network: &Network, stop_at: Option<NodeId>) -> SolverResult<BfsTree> {
    let n = network.node_count();
    let source = network.source();

    let mut parent = vec![None; n];
    let mut reached = vec![false; n];
    let mut queue = VecDeque::new();

    reached[source.idx()] = true;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for &residual in network.residual_arcs(u) {
            if !network.has_residual(residual) {
                continue;
            }
            let v = network.head(residual)?;
            if reached[v.idx()] {
                continue;
            }
            reached[v.idx()] = true;
            parent[v.idx()] = Some(residual);

            if Some(v) == stop_at {
                return Ok(BfsTree { parent, reached });
            }
            queue.push_back(v);
        }
    }

    Ok(BfsTree { parent, reached })
}

/// Shortest (fewest arcs) augmenting path from source to sink, if any.
///
/// The path is returned source-first.
pub fn augmenting_path(network: &Network) -> SolverResult<Option<Vec<ResidualArc>>> {
    let sink = network.sink();
    let tree = search(network, Some(sink))?;
    if !tree.reached(sink) {
        return Ok(None);
    }

    let mut path = Vec::new();
    let mut node = sink;
    while let Some(residual) = tree.parent[node.idx()] {
        path.push(residual);
        node = network.tail(residual)?;
    }
    path.reverse();
    Ok(Some(path))
}

/// Nodes reachable from the source in the residual graph.
pub fn reachable_from_source(network: &Network) -> SolverResult<Vec<bool>> {
    Ok(search(network, None)?.into_reached())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ft_graph::Direction;

    #[test]
    fn finds_shortest_path() {
        // 0 -> 1 -> 3 and 0 -> 3 directly: BFS takes the direct arc
        let net = Network::from_arcs(4, &[(0, 1, 1.0), (1, 3, 1.0), (0, 3, 1.0)]).unwrap();
        let path = augmenting_path(&net).unwrap().unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].arc.index(), 2);
    }

    #[test]
    fn ties_follow_insertion_order() {
        // Two equal-length routes: via node 1 (arcs 0, 2) and via node 2 (arcs 1, 3)
        let net = Network::from_arcs(
            4,
            &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)],
        )
        .unwrap();
        let path = augmenting_path(&net).unwrap().unwrap();
        let arcs: Vec<u32> = path.iter().map(|r| r.arc.index()).collect();
        assert_eq!(arcs, vec![0, 2]);
    }

    #[test]
    fn uses_backward_arcs() {
        let mut net = Network::from_arcs(
            4,
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (0, 2, 1.0), (1, 3, 1.0)],
        )
        .unwrap();
        // Saturate 0 -> 1 -> 2 -> 3
        for i in 0..3 {
            net.push_flow(ft_core::ArcId::from_index(i), 1.0).unwrap();
        }
        // Remaining route: 0 -> 2, cancel 1 -> 2, 1 -> 3
        let path = augmenting_path(&net).unwrap().unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[1].arc.index(), 1);
        assert_eq!(path[1].direction, Direction::Backward);
    }

    #[test]
    fn unreachable_sink_yields_none() {
        let net = Network::from_arcs(3, &[(0, 1, 5.0)]).unwrap();
        assert!(augmenting_path(&net).unwrap().is_none());
        assert_eq!(reachable_from_source(&net).unwrap(), vec![true, true, false]);
    }
}
