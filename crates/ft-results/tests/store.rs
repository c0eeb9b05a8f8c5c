use ft_results::{LabeledArc, LabeledSnapshot, RUN_ID_LEN, ResultsError, RunManifest, RunStore};

fn temp_store(name: &str) -> RunStore {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    RunStore::new(dir).unwrap()
}

fn run_id(digit: char) -> String {
    digit.to_string().repeat(RUN_ID_LEN)
}

fn snapshot(flow: f64) -> LabeledSnapshot {
    LabeledSnapshot {
        node_count: 2,
        arcs: vec![LabeledArc {
            from: "s".into(),
            to: "t".into(),
            capacity: 7.0,
            flow,
        }],
    }
}

fn manifest(run_id: &str, network_name: &str, timestamp: &str) -> RunManifest {
    RunManifest {
        run_id: run_id.into(),
        network_name: network_name.into(),
        timestamp: timestamp.into(),
        max_flow: 7.0,
        step_count: 1,
        solver_version: "0.1.0".into(),
        record_steps: true,
        nodes: vec!["s".into(), "t".into()],
    }
}

#[test]
fn save_and_load_run() {
    let store = temp_store("ft_results_save_and_load");
    let id = run_id('a');
    let m = manifest(&id, "single", "2026-01-01T00:00:00+00:00");

    assert!(!store.has_run(&id));
    store.save_run(&m, &snapshot(7.0), &[snapshot(7.0)]).unwrap();
    assert!(store.has_run(&id));

    assert_eq!(store.load_manifest(&id).unwrap(), m);
    assert_eq!(store.load_final(&id).unwrap(), snapshot(7.0));
    assert_eq!(store.load_steps(&id).unwrap(), vec![snapshot(7.0)]);
}

#[test]
fn run_without_steps_has_empty_step_file() {
    let store = temp_store("ft_results_no_steps");
    let mut m = manifest(&run_id('b'), "single", "2026-01-01T00:00:00+00:00");
    m.record_steps = false;
    m.step_count = 0;

    store.save_run(&m, &snapshot(7.0), &[]).unwrap();
    assert!(store.load_steps(&run_id('b')).unwrap().is_empty());
}

#[test]
fn list_runs_filters_and_sorts() {
    let store = temp_store("ft_results_list");
    store
        .save_run(&manifest(&run_id('0'), "single", "2026-01-01T00:00:00+00:00"), &snapshot(7.0), &[])
        .unwrap();
    store
        .save_run(&manifest(&run_id('1'), "single", "2026-03-01T00:00:00+00:00"), &snapshot(7.0), &[])
        .unwrap();
    store
        .save_run(&manifest(&run_id('2'), "diamond", "2026-02-01T00:00:00+00:00"), &snapshot(7.0), &[])
        .unwrap();

    let ids: Vec<String> = store
        .list_runs("single")
        .unwrap()
        .into_iter()
        .map(|m| m.run_id)
        .collect();
    assert_eq!(ids, vec![run_id('1'), run_id('0')]);
}

#[test]
fn delete_and_missing_runs() {
    let store = temp_store("ft_results_delete");
    let gone = run_id('c');
    store
        .save_run(&manifest(&gone, "single", "2026-01-01T00:00:00+00:00"), &snapshot(7.0), &[])
        .unwrap();
    store.delete_run(&gone).unwrap();

    assert!(!store.has_run(&gone));
    assert!(matches!(
        store.load_manifest(&gone),
        Err(ResultsError::RunNotFound { .. })
    ));
    store.delete_run(&run_id('d')).unwrap();
}

#[test]
fn store_for_network_lives_beside_file() {
    let dir = std::env::temp_dir().join("ft_results_for_network");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let store = RunStore::for_network(&dir.join("net.yaml")).unwrap();
    assert_eq!(store.root_dir(), dir.join(".flowtrace").join("runs"));
    assert!(store.root_dir().exists());
}

#[test]
fn run_ids_cannot_escape_the_store() {
    let base = std::env::temp_dir().join("ft_results_escape");
    let _ = std::fs::remove_dir_all(&base);
    let store = RunStore::new(base.join("runs")).unwrap();
    std::fs::create_dir_all(base.join("victim")).unwrap();
    std::fs::write(base.join("victim").join("manifest.json"), "{}").unwrap();

    for bad in ["../victim", "..", "", "/tmp", "ABC", "run-a"] {
        assert!(!store.has_run(bad));
        assert!(matches!(
            store.load_manifest(bad),
            Err(ResultsError::InvalidRunId { .. })
        ));
        assert!(matches!(
            store.delete_run(bad),
            Err(ResultsError::InvalidRunId { .. })
        ));
    }
    assert!(base.join("victim").join("manifest.json").exists());

    let mut m = manifest("../victim", "single", "2026-01-01T00:00:00+00:00");
    assert!(store.save_run(&m, &snapshot(7.0), &[]).is_err());
    m.run_id = run_id('e');
    store.save_run(&m, &snapshot(7.0), &[]).unwrap();
}
