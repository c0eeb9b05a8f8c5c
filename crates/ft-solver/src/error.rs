//! Error types for solver operations.

use ft_core::error::FtError;
use ft_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while solving.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Invalid options: {what}")]
    InvalidOptions { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

/// Input errors become `InvalidArg`; solver defects become `Invariant`.
impl From<SolverError> for FtError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::Graph(g) => g.into(),
            SolverError::InvalidOptions { what } => FtError::InvalidArg { what },
            SolverError::Invariant { what } => FtError::Invariant { what },
        }
    }
}
