//! Solver entry points.

use ft_core::{DEFAULT_RESIDUAL_TOLERANCE, Real};
use ft_graph::{Network, NetworkBuilder};
use rayon::prelude::*;
use tracing::info;

use crate::cut::{MinCut, min_cut};
use crate::edmonds_karp::{Augmentation, EdmondsKarp};
use crate::error::{SolverError, SolverResult};
use crate::trace::{Snapshot, Trace, TraceRecorder, TraceSink};

/// Solve configuration.
#[derive(Clone, Debug)]
pub struct SolveOptions {
    /// Snapshot the network after every augmentation.
    pub record_steps: bool,
    /// Residuals at or below this are treated as exhausted. `0.0` is an exact test.
    pub residual_tolerance: Real,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            record_steps: false,
            residual_tolerance: DEFAULT_RESIDUAL_TOLERANCE,
        }
    }
}

impl SolveOptions {
    pub fn with_steps() -> Self {
        Self {
            record_steps: true,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> SolverResult<()> {
        if !self.residual_tolerance.is_finite() || self.residual_tolerance < 0.0 {
            return Err(SolverError::InvalidOptions {
                what: format!(
                    "residual tolerance must be finite and non-negative, got {}",
                    self.residual_tolerance
                ),
            });
        }
        Ok(())
    }
}

/// Everything a solve produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    /// Maximum flow value: net flow leaving the source.
    pub value: Real,
    pub final_snapshot: Snapshot,
    /// One snapshot per augmentation; empty unless steps were recorded.
    pub steps: Vec<Snapshot>,
    pub augmentations: Vec<Augmentation>,
    pub min_cut: MinCut,
}

impl SolveOutcome {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn trace(&self) -> Trace {
        Trace {
            steps: self.steps.clone(),
            final_snapshot: self.final_snapshot.clone(),
        }
    }
}

/// An independent max-flow instance for [`solve_batch`].
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    pub node_count: usize,
    pub arcs: Vec<(usize, usize, Real)>,
}

impl Problem {
    pub fn new(node_count: usize, arcs: Vec<(usize, usize, Real)>) -> Self {
        Self { node_count, arcs }
    }
}

/// Build a network from `(source, target, capacity)` triples and solve it.
///
/// Node 0 is the source and `node_count - 1` the sink. Construction errors
/// are reported before any flow is pushed.
pub fn solve(
    node_count: usize,
    arcs: &[(usize, usize, Real)],
    options: &SolveOptions,
) -> SolverResult<SolveOutcome> {
    options.validate()?;

    let mut builder = NetworkBuilder::new(node_count).residual_tolerance(options.residual_tolerance);
    for &(source, target, capacity) in arcs {
        builder.add_arc(source, target, capacity);
    }
    let network = builder.build()?;

    solve_network(network, options)
}

/// Solve an already-built network, consuming it.
///
/// The network's own residual tolerance applies; `options.residual_tolerance`
/// is only used when the network is built by [`solve`].
pub fn solve_network(mut network: Network, options: &SolveOptions) -> SolverResult<SolveOutcome> {
    let mut recorder = TraceRecorder::new();
    let augmentations = EdmondsKarp::new(options.record_steps).run(&mut network, &mut recorder)?;

    let value = network.flow_value();
    let min_cut = min_cut(&network)?;
    let trace = recorder.into_trace().ok_or_else(|| SolverError::Invariant {
        what: "solver finished without a final snapshot".to_string(),
    })?;

    info!(
        nodes = network.node_count(),
        arcs = network.arcs().len(),
        value,
        augmentations = augmentations.len(),
        steps = trace.steps.len(),
        "max flow solved"
    );

    Ok(SolveOutcome {
        value,
        final_snapshot: trace.final_snapshot,
        steps: trace.steps,
        augmentations,
        min_cut,
    })
}

/// Solve in place, streaming checkpoints into a caller-supplied sink.
///
/// Residual comparisons use the network's own tolerance, fixed when it was
/// built. Returns the flow value; the network keeps the final flow.
pub fn solve_with_sink(
    network: &mut Network,
    sink: &mut dyn TraceSink,
    record_steps: bool,
) -> SolverResult<Real> {
    let augmentations = EdmondsKarp::new(record_steps).run(network, sink)?;
    let value = network.flow_value();
    info!(value, augmentations = augmentations.len(), "max flow solved");
    Ok(value)
}

/// Solve independent problems in parallel. Results keep the input order.
pub fn solve_batch(problems: &[Problem], options: &SolveOptions) -> Vec<SolverResult<SolveOutcome>> {
    problems
        .par_iter()
        .map(|p| solve(p.node_count, &p.arcs, options))
        .collect()
}
