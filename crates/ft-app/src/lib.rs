//! Shared application service layer for flowtrace.
//!
//! Centralizes the pipeline behind the command-line front end: load a
//! labeled network file, assign solver indices, solve, relabel the trace
//! and persist it in the run cache. Whole directories of network files can
//! be solved in parallel.

pub mod batch_service;
pub mod error;
pub mod network_service;
pub mod query;
pub mod run_service;

// Re-export key types for convenience
pub use batch_service::{BatchEntry, BatchValue, network_files, solve_directory};
pub use error::{AppError, AppResult};
pub use network_service::{
    IndexedNetwork, NetworkSummary, index_network, load_network, summarize, validate,
};
pub use query::{arc_flow_series, initial_snapshot, saturated_arcs};
pub use run_service::{
    LabeledOutcome, RunOptions, RunRequest, RunResponse, RunTiming, ensure_run, list_runs,
    load_run, solve_labeled,
};
