//! Run execution and caching service.

use std::path::Path;
use std::time::Instant;

use ft_project::schema::NetworkDef;
use ft_results::{LabeledArc, LabeledSnapshot, RunManifest, RunStore, relabel};
use ft_solver::{SolveOptions, solve};
use tracing::{debug, info};

use crate::error::AppResult;
use crate::network_service;

/// Options for running a solve.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub use_cache: bool,
    pub solver_version: String,
    pub record_steps: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            solver_version: env!("CARGO_PKG_VERSION").to_string(),
            record_steps: false,
        }
    }
}

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub network_path: &'a Path,
    pub options: RunOptions,
}

/// Wall-clock timing for a run.
#[derive(Debug, Clone, Default)]
pub struct RunTiming {
    pub solve_time_s: f64,
    pub save_time_s: f64,
    pub load_cache_time_s: f64,
    pub total_time_s: f64,
}

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub manifest: RunManifest,
    pub final_snapshot: LabeledSnapshot,
    pub steps: Vec<LabeledSnapshot>,
    pub loaded_from_cache: bool,
    pub timing: RunTiming,
}

/// A solve expressed entirely in external labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledOutcome {
    pub value: f64,
    /// Labels in solver index order.
    pub nodes: Vec<String>,
    pub final_snapshot: LabeledSnapshot,
    pub steps: Vec<LabeledSnapshot>,
    /// Labels on the source side of the minimum cut.
    pub source_side: Vec<String>,
    /// Arcs crossing the minimum cut.
    pub cut_arcs: Vec<LabeledArc>,
}

/// Solve a labeled network in memory: assign indices, solve, relabel.
pub fn solve_labeled(network: &NetworkDef, record_steps: bool) -> AppResult<LabeledOutcome> {
    ft_project::validate_network(network)?;
    let indexed = network_service::index_network(network)?;

    let options = SolveOptions {
        record_steps,
        ..SolveOptions::default()
    };
    let outcome = solve(indexed.node_count(), &indexed.arcs, &options)?;

    let final_snapshot = relabel(&outcome.final_snapshot, &indexed.labels)?;
    let steps = outcome
        .steps
        .iter()
        .map(|s| relabel(s, &indexed.labels))
        .collect::<Result<Vec<_>, _>>()?;

    let source_side = outcome
        .min_cut
        .source_nodes()
        .into_iter()
        .filter_map(|i| indexed.labels.label_of(i).map(str::to_string))
        .collect();
    let cut_arcs = outcome
        .min_cut
        .cut_arcs
        .iter()
        .filter_map(|id| final_snapshot.arcs.get(id.idx()).cloned())
        .collect();

    Ok(LabeledOutcome {
        value: outcome.value,
        nodes: indexed.labels.labels().to_vec(),
        final_snapshot,
        steps,
        source_side,
        cut_arcs,
    })
}

/// Execute or load a run based on request.
pub fn ensure_run(request: &RunRequest) -> AppResult<RunResponse> {
    let started = Instant::now();
    let mut timing = RunTiming::default();

    let network = network_service::load_network(request.network_path)?;
    let run_id = ft_results::compute_run_id(
        &network,
        request.options.record_steps,
        &request.options.solver_version,
    );
    let store = RunStore::for_network(request.network_path)?;

    if request.options.use_cache && store.has_run(&run_id) {
        let load_started = Instant::now();
        let manifest = store.load_manifest(&run_id)?;
        let final_snapshot = store.load_final(&run_id)?;
        let steps = store.load_steps(&run_id)?;
        timing.load_cache_time_s = load_started.elapsed().as_secs_f64();
        timing.total_time_s = started.elapsed().as_secs_f64();

        info!(run_id = %run_id, "loaded cached run");
        return Ok(RunResponse {
            run_id,
            manifest,
            final_snapshot,
            steps,
            loaded_from_cache: true,
            timing,
        });
    }

    let solve_started = Instant::now();
    let outcome = solve_labeled(&network, request.options.record_steps)?;
    timing.solve_time_s = solve_started.elapsed().as_secs_f64();

    let manifest = RunManifest {
        run_id: run_id.clone(),
        network_name: network.name.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        max_flow: outcome.value,
        step_count: outcome.steps.len(),
        solver_version: request.options.solver_version.clone(),
        record_steps: request.options.record_steps,
        nodes: outcome.nodes.clone(),
    };

    let save_started = Instant::now();
    store.save_run(&manifest, &outcome.final_snapshot, &outcome.steps)?;
    timing.save_time_s = save_started.elapsed().as_secs_f64();
    timing.total_time_s = started.elapsed().as_secs_f64();

    debug!(?timing, "run timing");
    info!(
        run_id = %run_id,
        network = %network.name,
        max_flow = outcome.value,
        steps = outcome.steps.len(),
        "run completed"
    );

    Ok(RunResponse {
        run_id,
        manifest,
        final_snapshot: outcome.final_snapshot,
        steps: outcome.steps,
        loaded_from_cache: false,
        timing,
    })
}

/// List runs stored for the network at `network_path`, most recent first.
pub fn list_runs(network_path: &Path) -> AppResult<Vec<RunManifest>> {
    let network = network_service::load_network(network_path)?;
    let store = RunStore::for_network(network_path)?;
    Ok(store.list_runs(&network.name)?)
}

/// Load a specific run.
pub fn load_run(
    network_path: &Path,
    run_id: &str,
) -> AppResult<(RunManifest, LabeledSnapshot, Vec<LabeledSnapshot>)> {
    let store = RunStore::for_network(network_path)?;

    let manifest = store.load_manifest(run_id)?;
    let final_snapshot = store.load_final(run_id)?;
    let steps = store.load_steps(run_id)?;

    Ok((manifest, final_snapshot, steps))
}
