mod terminal;

use clap::{Parser, Subcommand};
use ft_app::{AppResult, RunOptions, RunRequest, batch_service, network_service, query, run_service};
use ft_graph::Network;
use ft_project::{ArcSpec, NetworkDef};
use ft_results::LabeledSnapshot;
use ft_solver::solve_with_sink;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use terminal::{TerminalPrinter, write_labeled};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ft-cli")]
#[command(about = "flowtrace CLI - maximum flow with step-by-step traces", long_about = None)]
struct Cli {
    /// Log solver and service activity (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a network file
    Validate {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// Compute the maximum flow of a network file
    Solve {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
        /// Print the network after every augmentation
        #[arg(long)]
        steps: bool,
        /// Print the network before solving
        #[arg(long)]
        init: bool,
        /// Store the run in the cache next to the network file
        #[arg(long)]
        save: bool,
        /// Skip cache and force re-run (with --save)
        #[arg(long)]
        no_cache: bool,
    },
    /// Solve a network given on the command line as 1-based `from,to,capacity` arcs
    Inline {
        /// Number of nodes; node 1 is the source, the last node the sink
        node_count: usize,
        /// Arcs, e.g. `1,2,10`
        arcs: Vec<ArcSpec>,
        /// Print the network after every augmentation
        #[arg(long)]
        steps: bool,
        /// Print the network before solving
        #[arg(long)]
        init: bool,
        /// Also write the network as a labeled network file
        #[arg(long)]
        write: Option<PathBuf>,
    },
    /// Solve every network file in a directory in parallel
    Batch {
        /// Directory holding YAML or JSON network files
        dir: PathBuf,
    },
    /// List cached runs for a network file
    Runs {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// Show a cached run
    ShowRun {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
        /// Run ID to display
        run_id: String,
        /// Also print every recorded step
        #[arg(long)]
        steps: bool,
    },
    /// Export the flow of one arc across the recorded steps as CSV
    ExportSeries {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
        /// Run ID
        run_id: String,
        /// Arc tail label
        from: String,
        /// Arc head label
        to: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Solve {
            network_path,
            steps,
            init,
            save,
            no_cache,
        } => {
            if save {
                cmd_solve_saved(&network_path, steps, init, !no_cache)
            } else {
                cmd_solve(&network_path, steps, init)
            }
        }
        Commands::Inline {
            node_count,
            arcs,
            steps,
            init,
            write,
        } => cmd_inline(node_count, &arcs, steps, init, write.as_deref()),
        Commands::Batch { dir } => cmd_batch(&dir),
        Commands::Runs { network_path } => cmd_runs(&network_path),
        Commands::ShowRun {
            network_path,
            run_id,
            steps,
        } => cmd_show_run(&network_path, &run_id, steps),
        Commands::ExportSeries {
            network_path,
            run_id,
            from,
            to,
            output,
        } => cmd_export_series(&network_path, &run_id, &from, &to, output.as_deref()),
    }
}

fn cmd_validate(network_path: &Path) -> AppResult<()> {
    println!("Validating network: {}", network_path.display());
    let network = network_service::load_network(network_path)?;
    network_service::validate(&network)?;

    let summary = network_service::summarize(&network);
    println!("✓ Network is valid");
    println!(
        "  {} ({} nodes, {} arcs, {} -> {})",
        summary.name, summary.node_count, summary.arc_count, summary.source, summary.sink
    );
    Ok(())
}

fn cmd_solve(network_path: &Path, steps: bool, init: bool) -> AppResult<()> {
    let network = network_service::load_network(network_path)?;
    let outcome = run_service::solve_labeled(&network, steps)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let initial = init.then(|| query::initial_snapshot(&network));
    write_trace(
        &mut out,
        &outcome.nodes,
        initial.as_ref(),
        &outcome.steps,
        &outcome.final_snapshot,
    )?;

    writeln!(out)?;
    writeln!(out, "Max flow: {}", outcome.value)?;
    writeln!(out, "Min cut source side: {}", outcome.source_side.join(", "))?;
    for arc in &outcome.cut_arcs {
        writeln!(out, "  cut ({},{}), c={}", arc.from, arc.to, arc.capacity)?;
    }
    Ok(())
}

/// Initial graph (when given), every step, then the final graph.
fn write_trace(
    out: &mut impl Write,
    nodes: &[String],
    initial: Option<&LabeledSnapshot>,
    steps: &[LabeledSnapshot],
    final_snapshot: &LabeledSnapshot,
) -> io::Result<()> {
    if let Some(initial) = initial {
        write_labeled(out, "Initial graph", nodes, initial)?;
    }
    for (i, step) in steps.iter().enumerate() {
        write_labeled(out, &format!("Step {}", i + 1), nodes, step)?;
    }
    write_labeled(out, "Final graph", nodes, final_snapshot)
}

fn cmd_solve_saved(
    network_path: &Path,
    steps: bool,
    init: bool,
    use_cache: bool,
) -> AppResult<()> {
    let request = RunRequest {
        network_path,
        options: RunOptions {
            use_cache,
            record_steps: steps,
            ..RunOptions::default()
        },
    };
    let response = run_service::ensure_run(&request)?;

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.run_id);
    } else {
        println!("✓ Solve completed: {}", response.run_id);
    }
    println!("  Max flow: {}", response.manifest.max_flow);
    println!("  Steps recorded: {}", response.manifest.step_count);
    println!(
        "  Timing: solve {:.6} s, save {:.6} s, cache load {:.6} s, total {:.6} s",
        response.timing.solve_time_s,
        response.timing.save_time_s,
        response.timing.load_cache_time_s,
        response.timing.total_time_s
    );

    let initial = if init {
        let network = network_service::load_network(network_path)?;
        Some(query::initial_snapshot(&network))
    } else {
        None
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_trace(
        &mut out,
        &response.manifest.nodes,
        initial.as_ref(),
        &response.steps,
        &response.final_snapshot,
    )?;
    Ok(())
}

fn cmd_inline(
    node_count: usize,
    arcs: &[ArcSpec],
    steps: bool,
    init: bool,
    write: Option<&Path>,
) -> AppResult<()> {
    let triples: Vec<_> = arcs.iter().map(ArcSpec::as_triple).collect();

    if let Some(path) = write {
        let def = NetworkDef::from_indexed("inline", node_count, &triples);
        ft_project::save_path(path, &def)?;
        println!("Wrote network file: {}", path.display());
    }

    let mut network = Network::from_arcs(node_count, &triples)?;

    let stdout = io::stdout();
    let mut printer = TerminalPrinter::new(stdout.lock());
    if init {
        printer.initial(&network);
    }
    let value = solve_with_sink(&mut network, &mut printer, steps)?;
    printer.finish()?;

    println!("{}", value);
    Ok(())
}

fn cmd_batch(dir: &Path) -> AppResult<()> {
    let entries = batch_service::solve_directory(dir)?;
    if entries.is_empty() {
        println!("No network files found in {}", dir.display());
        return Ok(());
    }

    let mut failed = 0;
    for entry in &entries {
        let name = entry.name.as_deref().unwrap_or("?");
        match &entry.result {
            Ok(value) => println!(
                "{} ({}): the max flow is {} ({} augmentations)",
                entry.path.display(),
                name,
                value.max_flow,
                value.augmentations
            ),
            Err(err) => {
                failed += 1;
                println!("{} ({}): error: {}", entry.path.display(), name, err);
            }
        }
    }
    println!("Solved {} of {} networks", entries.len() - failed, entries.len());
    Ok(())
}

fn cmd_runs(network_path: &Path) -> AppResult<()> {
    let runs = run_service::list_runs(network_path)?;

    if runs.is_empty() {
        println!("No cached runs found");
    } else {
        println!("Cached runs:");
        for run in runs {
            println!(
                "  {} - max flow {} ({} steps, solver {}) at {}",
                run.run_id, run.max_flow, run.step_count, run.solver_version, run.timestamp
            );
        }
    }
    Ok(())
}

fn cmd_show_run(network_path: &Path, run_id: &str, show_steps: bool) -> AppResult<()> {
    println!("Loading run: {}", run_id);
    let (manifest, final_snapshot, steps) = run_service::load_run(network_path, run_id)?;

    println!("\nRun Summary:");
    println!("  Network: {}", manifest.network_name);
    println!("  Created: {}", manifest.timestamp);
    println!("  Max flow: {}", manifest.max_flow);
    println!("  Steps recorded: {}", steps.len());

    let saturated = query::saturated_arcs(&final_snapshot);
    println!("\nSaturated arcs:");
    for arc in saturated {
        println!("  ({},{}), c={}", arc.from, arc.to, arc.capacity);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if show_steps {
        for (i, step) in steps.iter().enumerate() {
            write_labeled(&mut out, &format!("Step {}", i + 1), &manifest.nodes, step)?;
        }
    }
    write_labeled(&mut out, "Final graph", &manifest.nodes, &final_snapshot)?;
    Ok(())
}

fn cmd_export_series(
    network_path: &Path,
    run_id: &str,
    from: &str,
    to: &str,
    output: Option<&Path>,
) -> AppResult<()> {
    let (_manifest, _final, steps) = run_service::load_run(network_path, run_id)?;
    let series = query::arc_flow_series(&steps, from, to)?;

    let mut csv = String::from("step,flow\n");
    for (i, flow) in series.iter().enumerate() {
        csv.push_str(&format!("{},{}\n", i + 1, flow));
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("Exported {} steps to {}", series.len(), path.display());
    } else {
        print!("{}", csv);
    }
    Ok(())
}
