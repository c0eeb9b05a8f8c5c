use std::path::PathBuf;

use ft_app::{AppError, RunOptions, RunRequest, query, run_service};
use ft_project::schema::NetworkDef;
use ft_results::RunStore;

fn write_diamond(dir_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(dir_name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let network = NetworkDef::new("diamond", "s", "t")
        .with_arc("s", "a", 10.0)
        .with_arc("s", "b", 5.0)
        .with_arc("a", "t", 5.0)
        .with_arc("b", "t", 10.0);
    let path = dir.join("diamond.yaml");
    ft_project::save_yaml(&path, &network).unwrap();
    path
}

fn options(use_cache: bool, record_steps: bool) -> RunOptions {
    RunOptions {
        use_cache,
        solver_version: "0.1.0".to_string(),
        record_steps,
    }
}

#[test]
fn run_persists_in_network_store() {
    let path = write_diamond("ft_app_run_persists");
    let request = RunRequest {
        network_path: &path,
        options: options(false, true),
    };

    let response = run_service::ensure_run(&request).unwrap();
    assert!(!response.loaded_from_cache);
    assert_eq!(response.manifest.max_flow, 10.0);
    assert_eq!(response.manifest.step_count, 2);
    assert_eq!(response.manifest.nodes, vec!["s", "a", "b", "t"]);

    let store = RunStore::for_network(&path).unwrap();
    let runs = store.list_runs("diamond").unwrap();
    assert!(runs.iter().any(|r| r.run_id == response.run_id));

    let steps = store.load_steps(&response.run_id).unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(query::arc_flow_series(&steps, "s", "a").unwrap(), vec![5.0, 5.0]);
    assert_eq!(query::arc_flow_series(&steps, "s", "b").unwrap(), vec![0.0, 5.0]);
}

#[test]
fn second_run_hits_cache() {
    let path = write_diamond("ft_app_cache_hit");
    let request = RunRequest {
        network_path: &path,
        options: options(true, false),
    };

    let first = run_service::ensure_run(&request).unwrap();
    let second = run_service::ensure_run(&request).unwrap();

    assert!(!first.loaded_from_cache);
    assert!(second.loaded_from_cache);
    assert_eq!(first.run_id, second.run_id);
    assert_eq!(first.final_snapshot, second.final_snapshot);
    assert!(second.steps.is_empty());

    let (manifest, final_snapshot, _) = run_service::load_run(&path, &first.run_id).unwrap();
    assert_eq!(manifest.max_flow, 10.0);
    assert_eq!(query::saturated_arcs(&final_snapshot).len(), 2);
    assert_eq!(run_service::list_runs(&path).unwrap().len(), 1);
}

#[test]
fn step_recording_changes_run_id() {
    let path = write_diamond("ft_app_run_id");
    let without = run_service::ensure_run(&RunRequest {
        network_path: &path,
        options: options(true, false),
    })
    .unwrap();
    let with = run_service::ensure_run(&RunRequest {
        network_path: &path,
        options: options(true, true),
    })
    .unwrap();

    assert_ne!(without.run_id, with.run_id);
    assert_eq!(run_service::list_runs(&path).unwrap().len(), 2);
}

#[test]
fn unknown_run_is_reported() {
    let path = write_diamond("ft_app_unknown_run");
    assert!(matches!(
        run_service::load_run(&path, &"0".repeat(64)),
        Err(AppError::RunNotFound(_))
    ));
    assert!(matches!(
        run_service::load_run(&path, "../../diamond"),
        Err(AppError::InvalidInput(_))
    ));
}
