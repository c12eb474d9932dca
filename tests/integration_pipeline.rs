// tests/integration_pipeline.rs
//! End-to-end runs: matrix file in, result file out.

use clap::Parser;
use closeness_core::cli::{handlers, Cli};
use closeness_core::exit::ClosenessExit;
use closeness_core::io::{load_matrix, read_results, write_results};
use closeness_core::ClosenessError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn workspace(matrix: &str) -> TempDir {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("graph.adjmat"), matrix).unwrap();
    // Keep runs independent of any closeness.toml in the working directory.
    fs::write(d.path().join("closeness.toml"), "").unwrap();
    d
}

fn run(dir: &Path, extra: &[&str]) -> anyhow::Result<ClosenessExit> {
    let input = dir.join("graph.adjmat");
    let config = dir.join("closeness.toml");
    let mut args = vec![
        "closeness".to_string(),
        input.display().to_string(),
        "--config".to_string(),
        config.display().to_string(),
    ];
    args.extend(extra.iter().map(ToString::to_string));
    handlers::handle_compute(&Cli::parse_from(args))
}

#[test]
fn test_triangle_normalized_file() {
    let d = workspace("011\n101\n110\n");
    assert_eq!(run(d.path(), &["true"]).unwrap(), ClosenessExit::Success);

    let written = fs::read_to_string(d.path().join("graph.closeness")).unwrap();
    assert_eq!(
        written,
        "1.0000000000000000\n1.0000000000000000\n1.0000000000000000"
    );
}

#[test]
fn test_unnormalized_default() {
    let d = workspace("011\n101\n110");
    run(d.path(), &["false"]).unwrap();
    let scores = read_results(&d.path().join("graph.closeness")).unwrap();
    assert_eq!(scores, vec![0.5, 0.5, 0.5]);
}

#[test]
fn test_config_supplies_normalization() {
    let d = workspace("011\n101\n110");
    fs::write(d.path().join("closeness.toml"), "normalize = true\n").unwrap();
    run(d.path(), &[]).unwrap();
    let scores = read_results(&d.path().join("graph.closeness")).unwrap();
    assert_eq!(scores, vec![1.0, 1.0, 1.0]);
}

#[test]
fn test_harmonic_writes_own_suffix() {
    let d = workspace("010\n100\n000");
    run(d.path(), &["false", "--measure", "harmonic"]).unwrap();
    let scores = read_results(&d.path().join("graph.harmonic")).unwrap();
    assert_eq!(scores, vec![1.0, 1.0, 0.0]);
}

#[test]
fn test_explicit_output_creates_directories() {
    let d = workspace("01\n10");
    let out = d.path().join("nested/dir/out.txt");
    let out_arg = out.display().to_string();
    run(d.path(), &["true", "--output", &out_arg, "--json"]).unwrap();
    assert_eq!(read_results(&out).unwrap(), vec![1.0, 1.0]);
}

#[test]
fn test_isolated_vertex_written_non_zero() {
    let d = workspace("010\n100\n000");
    run(d.path(), &["false"]).unwrap();
    let written = fs::read_to_string(d.path().join("graph.closeness")).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "0.0000000004656613");
    assert_eq!(lines[1], "0.0000000004656613");
    assert_eq!(lines[2], "0.0000000002328306");

    for score in read_results(&d.path().join("graph.closeness")).unwrap() {
        assert!(score > 0.0);
    }
}

#[test]
fn test_single_vertex_infinity_written() {
    let d = workspace("0");
    run(d.path(), &["true"]).unwrap();
    let written = fs::read_to_string(d.path().join("graph.closeness")).unwrap();
    assert_eq!(written, "inf");
    let scores = read_results(&d.path().join("graph.closeness")).unwrap();
    assert!(scores[0].is_infinite());
}

#[test]
fn test_single_vertex_error_policy_exit() {
    let d = workspace("0");
    let err = run(d.path(), &["true", "--degenerate", "error"]).unwrap_err();
    assert_eq!(ClosenessExit::from_error(&err), ClosenessExit::Degenerate);
    assert!(!d.path().join("graph.closeness").exists());
}

#[test]
fn test_missing_input_is_invalid_input() {
    let d = workspace("01\n10");
    fs::remove_file(d.path().join("graph.adjmat")).unwrap();
    let err = run(d.path(), &["true"]).unwrap_err();
    assert_eq!(ClosenessExit::from_error(&err), ClosenessExit::InvalidInput);
    assert!(matches!(
        err.downcast_ref::<ClosenessError>(),
        Some(ClosenessError::InputUnavailable { .. })
    ));
}

#[test]
fn test_malformed_input_is_invalid_input() {
    let d = workspace("011\n10\n110");
    let err = run(d.path(), &["false"]).unwrap_err();
    assert_eq!(ClosenessExit::from_error(&err), ClosenessExit::InvalidInput);
    assert!(!d.path().join("graph.closeness").exists());
}

#[test]
fn test_bad_config_is_error() {
    let d = workspace("01\n10");
    fs::write(d.path().join("closeness.toml"), "measure = \"pagerank\"\n").unwrap();
    let err = run(d.path(), &["false"]).unwrap_err();
    assert_eq!(ClosenessExit::from_error(&err), ClosenessExit::Error);
}

#[test]
fn test_round_trip_precision() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("scores.closeness");
    let scores = vec![0.5, 1.0 / 3.0, 0.123_456_789_012_345_6, 2.0 / 7.0];
    write_results(&path, &scores).unwrap();
    let back = read_results(&path).unwrap();
    assert_eq!(back.len(), scores.len());
    for (a, b) in scores.iter().zip(&back) {
        assert!((a - b).abs() <= 1e-16, "{a} vs {b}");
    }
}

#[test]
fn test_load_matrix_reads_file() {
    let d = workspace("030\n200\n000");
    let g = load_matrix(&d.path().join("graph.adjmat")).unwrap();
    assert_eq!(g.size(), 3);
    assert_eq!(g.edge_count(), 2);
}
