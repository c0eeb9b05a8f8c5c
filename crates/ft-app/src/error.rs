//! Error types for the ft-app service layer.

use std::path::PathBuf;

use ft_core::FtError;

/// Application error type that wraps errors from the backend crates.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Network file error: {0}")]
    Project(String),

    #[error("Network file not found: {path}")]
    NetworkFileMissing { path: PathBuf },

    #[error("Network validation failed: {0}")]
    Validation(String),

    #[error("Invalid network: {0}")]
    Graph(String),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Run not found: {0}")]
    RunNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ft-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<ft_project::ProjectError> for AppError {
    fn from(err: ft_project::ProjectError) -> Self {
        match err {
            ft_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<ft_project::ValidationError> for AppError {
    fn from(err: ft_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<FtError> for AppError {
    fn from(err: FtError) -> Self {
        match err {
            FtError::InvalidArg { what } => AppError::Graph(what),
            FtError::Invariant { what } => AppError::Solver(what),
        }
    }
}

impl From<ft_graph::GraphError> for AppError {
    fn from(err: ft_graph::GraphError) -> Self {
        FtError::from(err).into()
    }
}

impl From<ft_solver::SolverError> for AppError {
    fn from(err: ft_solver::SolverError) -> Self {
        match err {
            ft_solver::SolverError::InvalidOptions { what } => AppError::InvalidInput(what),
            other => FtError::from(other).into(),
        }
    }
}

impl From<ft_results::ResultsError> for AppError {
    fn from(err: ft_results::ResultsError) -> Self {
        match err {
            ft_results::ResultsError::RunNotFound { run_id } => AppError::RunNotFound(run_id),
            err @ ft_results::ResultsError::InvalidRunId { .. } => {
                AppError::InvalidInput(err.to_string())
            }
            other => AppError::Results(other.to_string()),
        }
    }
}
