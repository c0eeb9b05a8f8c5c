use std::path::PathBuf;

use ft_app::{AppError, network_files, solve_directory};
use ft_project::schema::NetworkDef;

fn batch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let diamond = NetworkDef::new("diamond", "s", "t")
        .with_arc("s", "a", 10.0)
        .with_arc("s", "b", 5.0)
        .with_arc("a", "t", 5.0)
        .with_arc("b", "t", 10.0);
    ft_project::save_yaml(&dir.join("b_diamond.yaml"), &diamond).unwrap();

    let single = NetworkDef::new("single", "s", "t").with_arc("s", "t", 7.5);
    ft_project::save_json(&dir.join("a_single.json"), &single).unwrap();

    let unreachable = NetworkDef::new("cut off", "s", "t").with_arc("s", "a", 3.0);
    ft_project::save_yaml(&dir.join("c_unreachable.yml"), &unreachable).unwrap();

    std::fs::write(dir.join("d_broken.yaml"), "name: [unterminated").unwrap();
    std::fs::write(dir.join("notes.txt"), "not a network").unwrap();
    std::fs::create_dir_all(dir.join("nested.yaml")).unwrap();
    dir
}

#[test]
fn only_network_files_are_listed() {
    let dir = batch_dir("ft_app_batch_listing");
    let names: Vec<String> = network_files(&dir)
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["a_single.json", "b_diamond.yaml", "c_unreachable.yml", "d_broken.yaml"]
    );
}

#[test]
fn directory_is_solved_in_file_order() {
    let dir = batch_dir("ft_app_batch_solve");
    let entries = solve_directory(&dir).unwrap();
    assert_eq!(entries.len(), 4);

    assert_eq!(entries[0].name.as_deref(), Some("single"));
    let single = entries[0].result.as_ref().unwrap();
    assert_eq!(single.max_flow, 7.5);
    assert_eq!(single.augmentations, 1);

    assert_eq!(entries[1].name.as_deref(), Some("diamond"));
    assert_eq!(entries[1].result.as_ref().unwrap().max_flow, 10.0);

    assert_eq!(entries[2].name.as_deref(), Some("cut off"));
    assert_eq!(entries[2].result.as_ref().unwrap().max_flow, 0.0);

    assert!(entries[3].name.is_none());
    assert!(matches!(entries[3].result, Err(AppError::Project(_))));
}

#[test]
fn empty_directory_yields_no_entries() {
    let dir = std::env::temp_dir().join("ft_app_batch_empty");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    assert!(solve_directory(&dir).unwrap().is_empty());
}
