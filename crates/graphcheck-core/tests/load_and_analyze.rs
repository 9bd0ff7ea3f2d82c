use graphcheck_core::error::{ExitCode, GraphError};
use graphcheck_core::graph::{analyze, build, ComponentResult};
use graphcheck_core::input::{load_path, parse_str};
use std::fs;
use tempfile::tempdir;

fn run(text: &str) -> Result<Vec<ComponentResult>, GraphError> {
    let list = parse_str(text)?;
    let graph = build(&list)?;
    Ok(analyze(&graph))
}

fn summary(components: &[ComponentResult]) -> Vec<(usize, bool, bool)> {
    components
        .iter()
        .map(|c| (c.node_count(), c.bipartite, c.has_cycle))
        .collect()
}

#[test]
fn test_path_scenario() {
    let components = run("3\n1: 2\n2: 1 3\n3: 2\n").unwrap();
    assert_eq!(summary(&components), vec![(3, true, false)]);
}

#[test]
fn test_triangle_scenario() {
    let components = run("3\n1: 2 3\n2: 1 3\n3: 1 2\n").unwrap();
    assert_eq!(summary(&components), vec![(3, false, true)]);
}

#[test]
fn test_square_scenario() {
    let components = run("4\n1: 2 4\n2: 1 3\n3: 2 4\n4: 1 3\n").unwrap();
    assert_eq!(summary(&components), vec![(4, true, true)]);
}

#[test]
fn test_two_edges_scenario() {
    let components = run("4\n1: 2\n2: 1\n3: 4\n4: 3\n").unwrap();
    assert_eq!(summary(&components), vec![(2, true, false), (2, true, false)]);
}

#[test]
fn test_single_sided_declarations_match_double_sided() {
    let single = run("4\n1: 2 4\n2: 3\n3: 4\n4:\n").unwrap();
    let double = run("4\n1: 2 4\n2: 1 3\n3: 2 4\n4: 1 3\n").unwrap();
    assert_eq!(single, double);
}

#[test]
fn test_bad_count_is_malformed() {
    let err = run("abc\n").unwrap_err();
    assert!(matches!(err, GraphError::MalformedInput { line: 1, .. }));
    assert_eq!(err.exit_code(), ExitCode::Data);
}

#[test]
fn test_out_of_range_neighbor_is_malformed() {
    let err = run("3\n1: 99\n2:\n3:\n").unwrap_err();
    assert!(matches!(err, GraphError::MalformedInput { line: 2, .. }));
}

#[test]
fn test_load_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.txt");
    fs::write(&path, "2\n1: 2\n2:\n").unwrap();

    let graph = build(&load_path(&path).unwrap()).unwrap();
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}
