//! Solve every network file in a directory in parallel.

use std::fs;
use std::path::{Path, PathBuf};

use ft_solver::{Problem, SolveOptions, solve_batch};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::network_service;

/// Outcome for one file of a batch.
#[derive(Debug)]
pub struct BatchEntry {
    pub path: PathBuf,
    /// Network name, when the file could be read.
    pub name: Option<String>,
    pub result: AppResult<BatchValue>,
}

/// Value and size of a solved network.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchValue {
    pub max_flow: f64,
    pub augmentations: usize,
}

/// Network files directly inside `dir`, sorted by path.
pub fn network_files(dir: &Path) -> AppResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(AppError::InvalidInput(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && ft_project::is_network_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load, index and solve every network file in `dir`.
///
/// Files that fail to load or index get an error entry; the rest are solved
/// together with [`solve_batch`]. Entries follow [`network_files`] order.
pub fn solve_directory(dir: &Path) -> AppResult<Vec<BatchEntry>> {
    let files = network_files(dir)?;

    let mut problems = Vec::new();
    let mut loaded = Vec::with_capacity(files.len());
    for path in files {
        let name = load_problem(&path).map(|(name, problem)| {
            problems.push(problem);
            name
        });
        if let Err(err) = &name {
            warn!(path = %path.display(), error = %err, "skipping network file");
        }
        loaded.push((path, name));
    }

    let mut outcomes = solve_batch(&problems, &SolveOptions::default()).into_iter();
    let mut entries = Vec::with_capacity(loaded.len());
    for (path, name) in loaded {
        let entry = match name {
            Ok(name) => {
                let outcome = outcomes.next().ok_or_else(|| {
                    AppError::Solver("batch returned fewer results than problems".to_string())
                })?;
                BatchEntry {
                    path,
                    name: Some(name),
                    result: outcome.map_err(AppError::from).map(|o| BatchValue {
                        max_flow: o.value,
                        augmentations: o.augmentations.len(),
                    }),
                }
            }
            Err(err) => BatchEntry {
                path,
                name: None,
                result: Err(err),
            },
        };
        entries.push(entry);
    }

    info!(
        dir = %dir.display(),
        files = entries.len(),
        solved = problems.len(),
        "batch solved"
    );
    Ok(entries)
}

fn load_problem(path: &Path) -> AppResult<(String, Problem)> {
    let network = network_service::load_network(path)?;
    ft_project::validate_network(&network)?;
    let indexed = network_service::index_network(&network)?;
    Ok((network.name, Problem::new(indexed.node_count(), indexed.arcs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_invalid_input() {
        let dir = std::env::temp_dir().join("ft_app_batch_no_such_dir");
        let _ = fs::remove_dir_all(&dir);
        assert!(matches!(
            solve_directory(&dir),
            Err(AppError::InvalidInput(_))
        ));
    }
}
