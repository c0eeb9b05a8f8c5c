//! Maximum-flow solver with execution traces.
//!
//! This crate computes the maximum flow from node 0 to node N-1 of an
//! `ft_graph::Network` using breadth-first augmenting paths (Edmonds-Karp),
//! and records an immutable snapshot of the network after every augmentation
//! plus one at termination, so the solve can be replayed step by step.

pub mod bfs;
pub mod cut;
pub mod edmonds_karp;
pub mod error;
pub mod solve;
pub mod trace;

pub use cut::{MinCut, min_cut};
pub use edmonds_karp::{Augmentation, EdmondsKarp};
pub use error::{SolverError, SolverResult};
pub use solve::{
    Problem, SolveOptions, SolveOutcome, solve, solve_batch, solve_network, solve_with_sink,
};
pub use trace::{ArcRecord, Snapshot, Trace, TraceRecorder, TraceSink};
