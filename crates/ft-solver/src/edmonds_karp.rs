//! Edmonds-Karp: Ford-Fulkerson with breadth-first augmenting paths.
//!
//! Each round finds a shortest augmenting path, pushes its bottleneck along
//! every residual arc of the path and, when step recording is on, hands the
//! network to the trace sink. Shortest-path augmentation bounds the number of
//! rounds by V*E regardless of capacity magnitudes.

use ft_core::Real;
use ft_graph::{Network, ResidualArc};
use tracing::{debug, trace};

use crate::bfs;
use crate::error::{SolverError, SolverResult};
use crate::trace::TraceSink;

/// One completed augmentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Augmentation {
    /// Residual arcs from source to sink.
    pub path: Vec<ResidualArc>,
    /// Flow pushed along the path (the path's bottleneck).
    pub amount: Real,
}

/// Augmenting-path engine.
#[derive(Debug, Clone, Copy)]
pub struct EdmondsKarp {
    record_steps: bool,
}

impl EdmondsKarp {
    pub fn new(record_steps: bool) -> Self {
        Self { record_steps }
    }

    /// Upper bound on augmentations for a network of this shape.
    pub fn augmentation_bound(network: &Network) -> usize {
        network
            .node_count()
            .saturating_mul(network.arcs().len().max(1))
    }

    /// Augment until no path remains, then finalize the sink.
    ///
    /// Returns the augmentations in the order they were applied.
    pub fn run(
        &self,
        network: &mut Network,
        sink: &mut dyn TraceSink,
    ) -> SolverResult<Vec<Augmentation>> {
        let bound = Self::augmentation_bound(network);
        let mut augmentations = Vec::new();

        while let Some(path) = bfs::augmenting_path(network)? {
            if augmentations.len() >= bound {
                return Err(SolverError::Invariant {
                    what: format!("more than {} augmentations", bound),
                });
            }

            let amount = bottleneck(network, &path)?;
            for &residual in &path {
                network.augment(residual, amount)?;
            }

            debug!(
                step = augmentations.len(),
                path_len = path.len(),
                amount,
                "augmented"
            );
            trace!(?path, "augmenting path");

            let augmentation = Augmentation { path, amount };
            if self.record_steps {
                sink.record(network, &augmentation);
            }
            augmentations.push(augmentation);
        }

        sink.finalize(network);
        Ok(augmentations)
    }
}

/// Smallest residual capacity along a path.
fn bottleneck(network: &Network, path: &[ResidualArc]) -> SolverResult<Real> {
    let mut amount = Real::INFINITY;
    for &residual in path {
        amount = amount.min(network.residual_capacity(residual)?);
    }
    if !amount.is_finite() || amount <= 0.0 {
        return Err(SolverError::Invariant {
            what: format!("augmenting path with bottleneck {}", amount),
        });
    }
    Ok(amount)
}
