//! Execution traces: immutable network snapshots taken during a solve.

use ft_core::{Real, Tolerances, nearly_equal};
use ft_graph::Network;

use crate::edmonds_karp::Augmentation;

/// One arc's state at the instant a snapshot was taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcRecord {
    pub source: usize,
    pub target: usize,
    pub capacity: Real,
    pub flow: Real,
}

/// Owned copy of every arc's capacity and flow at one point in time.
///
/// A snapshot shares no storage with the network it was taken from.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub node_count: usize,
    pub arcs: Vec<ArcRecord>,
}

impl Snapshot {
    /// Deep-copy the current state of a network.
    pub fn capture(network: &Network) -> Self {
        let arcs = network
            .arcs()
            .iter()
            .map(|arc| ArcRecord {
                source: arc.source.idx(),
                target: arc.target.idx(),
                capacity: arc.capacity,
                flow: arc.flow(),
            })
            .collect();
        Self {
            node_count: network.node_count(),
            arcs,
        }
    }

    /// `(source, target, capacity)` for every arc, in arc order.
    pub fn capacities(&self) -> impl Iterator<Item = (usize, usize, Real)> + '_ {
        self.arcs.iter().map(|a| (a.source, a.target, a.capacity))
    }

    /// `(source, target, flow)` for every arc, in arc order.
    pub fn flows(&self) -> impl Iterator<Item = (usize, usize, Real)> + '_ {
        self.arcs.iter().map(|a| (a.source, a.target, a.flow))
    }

    /// Inflow minus outflow at a node.
    pub fn excess(&self, node: usize) -> Real {
        let inflow: Real = self
            .arcs
            .iter()
            .filter(|a| a.target == node)
            .map(|a| a.flow)
            .sum();
        let outflow: Real = self
            .arcs
            .iter()
            .filter(|a| a.source == node)
            .map(|a| a.flow)
            .sum();
        inflow - outflow
    }

    /// Net flow leaving node 0.
    pub fn flow_value(&self) -> Real {
        -self.excess(0)
    }

    /// Whether every interior node balances within `tol`.
    pub fn is_conserved(&self, tol: Tolerances) -> bool {
        let sink = self.node_count.saturating_sub(1);
        (1..sink).all(|node| nearly_equal(self.excess(node), 0.0, tol))
    }

    /// Whether every arc satisfies `0 <= flow <= capacity`.
    pub fn respects_capacities(&self) -> bool {
        self.arcs
            .iter()
            .all(|a| a.flow >= 0.0 && a.flow <= a.capacity)
    }
}

/// Chronological step snapshots plus the terminal snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub steps: Vec<Snapshot>,
    pub final_snapshot: Snapshot,
}

/// Receiver of the solver's checkpoints.
///
/// The solver calls `record` after each augmentation (only when step
/// recording is enabled) and `finalize` exactly once when it terminates.
pub trait TraceSink {
    /// Observe the network right after an augmentation.
    fn record(&mut self, network: &Network, augmentation: &Augmentation);

    /// Observe the terminal network state.
    fn finalize(&mut self, network: &Network);
}

/// Buffering sink that builds a [`Trace`].
#[derive(Debug, Default)]
pub struct TraceRecorder {
    steps: Vec<Snapshot>,
    final_snapshot: Option<Snapshot>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of step snapshots taken so far.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Finish recording. `None` if `finalize` was never called.
    pub fn into_trace(self) -> Option<Trace> {
        let final_snapshot = self.final_snapshot?;
        Some(Trace {
            steps: self.steps,
            final_snapshot,
        })
    }
}

impl TraceSink for TraceRecorder {
    fn record(&mut self, network: &Network, _augmentation: &Augmentation) {
        self.steps.push(Snapshot::capture(network));
    }

    fn finalize(&mut self, network: &Network) {
        self.final_snapshot = Some(Snapshot::capture(network));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ft_core::ArcId;

    fn augmentation(amount: Real) -> Augmentation {
        Augmentation {
            path: Vec::new(),
            amount,
        }
    }

    #[test]
    fn snapshot_does_not_alias_network() {
        let mut net = Network::from_arcs(2, &[(0, 1, 5.0)]).unwrap();
        let before = Snapshot::capture(&net);
        net.push_flow(ArcId::from_index(0), 3.0).unwrap();
        let after = Snapshot::capture(&net);

        assert_eq!(before.arcs[0].flow, 0.0);
        assert_eq!(after.arcs[0].flow, 3.0);
    }

    #[test]
    fn recorder_keeps_chronological_order() {
        let mut net = Network::from_arcs(2, &[(0, 1, 5.0)]).unwrap();
        let mut recorder = TraceRecorder::new();

        net.push_flow(ArcId::from_index(0), 1.0).unwrap();
        recorder.record(&net, &augmentation(1.0));
        net.push_flow(ArcId::from_index(0), 2.0).unwrap();
        recorder.record(&net, &augmentation(2.0));
        assert_eq!(recorder.step_count(), 2);

        recorder.finalize(&net);
        let trace = recorder.into_trace().unwrap();
        assert_eq!(trace.steps[0].arcs[0].flow, 1.0);
        assert_eq!(trace.steps[1].arcs[0].flow, 3.0);
        assert_eq!(trace.final_snapshot.arcs[0].flow, 3.0);
    }

    #[test]
    fn recorder_without_finalize_has_no_trace() {
        assert!(TraceRecorder::new().into_trace().is_none());
    }

    #[test]
    fn snapshot_balance_helpers() {
        let snap = Snapshot {
            node_count: 3,
            arcs: vec![
                ArcRecord {
                    source: 0,
                    target: 1,
                    capacity: 4.0,
                    flow: 2.0,
                },
                ArcRecord {
                    source: 1,
                    target: 2,
                    capacity: 2.0,
                    flow: 2.0,
                },
            ],
        };
        assert_eq!(snap.flow_value(), 2.0);
        assert!(snap.is_conserved(Tolerances::default()));
        assert!(snap.respects_capacities());
        assert_eq!(
            snap.capacities().collect::<Vec<_>>(),
            vec![(0, 1, 4.0), (1, 2, 2.0)]
        );
    }
}
