//! ft-results: labeled trace records and run cache storage.

pub mod hash;
pub mod relabel;
pub mod store;
pub mod types;

pub use hash::{RUN_ID_LEN, compute_run_id, is_valid_run_id};
pub use relabel::relabel;
pub use store::RunStore;
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Run not found: {run_id}")]
    RunNotFound { run_id: String },

    #[error("Invalid run ID '{run_id}': expected 64 lowercase hex digits")]
    InvalidRunId { run_id: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },

    #[error("Node index {index} has no label (network has {node_count} nodes)")]
    UnknownIndex { index: usize, node_count: usize },
}
