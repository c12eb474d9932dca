// tests/unit_centrality.rs
//! Closeness scores on small matrices with known answers.

use closeness_core::centrality::{
    closeness, compute_closeness, CentralityEngine, CentralityOptions, DegeneratePolicy, Measure,
};
use closeness_core::graph::{compute_distances, Graph};
use closeness_core::io::parse_matrix;
use closeness_core::ClosenessError;
use std::path::Path;

fn matrix(text: &str) -> Graph {
    parse_matrix(text, Path::new("inline.adjmat")).unwrap()
}

#[test]
fn test_single_vertex_is_infinite() {
    let g = matrix("0");
    assert_eq!(compute_distances(&g, 0), vec![0]);
    let plain = compute_closeness(&g, false);
    let normalized = compute_closeness(&g, true);
    assert!(plain[0].is_infinite() && plain[0] > 0.0);
    assert!(normalized[0].is_infinite() && normalized[0] > 0.0);
}

#[test]
fn test_single_vertex_error_policy() {
    let g = matrix("0");
    let engine = CentralityEngine::new(CentralityOptions {
        degenerate: DegeneratePolicy::Error,
        ..CentralityOptions::default()
    });
    let err = engine.compute(&g).unwrap_err();
    assert!(matches!(err, ClosenessError::DegenerateCloseness { vertex: 0 }));
}

#[test]
fn test_triangle() {
    let g = matrix("011\n101\n110");
    assert_eq!(compute_closeness(&g, false), vec![0.5, 0.5, 0.5]);
    assert_eq!(compute_closeness(&g, true), vec![1.0, 1.0, 1.0]);
}

#[test]
fn test_isolated_vertex_scores_small_but_printable() {
    let g = matrix("010\n100\n000");
    let scores = compute_closeness(&g, false);
    assert_eq!(scores, vec![1.0 / 2_147_483_648.0, 1.0 / 2_147_483_648.0, 1.0 / 4_294_967_294.0]);
    for s in scores {
        assert!(s > 1e-16, "score {s} would print as zero");
    }
}

#[test]
fn test_asymmetric_weights() {
    let g = matrix("030\n200\n000");
    let d0 = compute_distances(&g, 0);
    let d1 = compute_distances(&g, 1);
    assert_eq!(d0[1], 3);
    assert_eq!(d1[0], 2);

    let scores = compute_closeness(&g, false);
    // Vertex 2 is unreachable from both; the reachable legs still separate them.
    assert!(scores[1] > scores[0]);
    assert!(scores[0] > 0.0);
}

#[test]
fn test_unreachable_does_not_hide_reachable_sum() {
    let g = matrix("010\n900\n000");
    let scores = compute_closeness(&g, false);
    assert_ne!(scores[0], scores[1]);
    assert_eq!(scores[0], 1.0 / (1.0 + 2_147_483_647.0));
    assert_eq!(scores[1], 1.0 / (9.0 + 2_147_483_647.0));
}

#[test]
fn test_normalized_is_exact_multiple() {
    let g = matrix("0120\n0013\n2004\n1110");
    let plain = compute_closeness(&g, false);
    let normalized = compute_closeness(&g, true);
    for (p, n) in plain.iter().zip(&normalized) {
        assert_eq!(*n, p * 3.0);
    }
}

#[test]
fn test_monotone_in_distance_sum() {
    let g = matrix("0120\n0013\n2004\n1110");
    let mut pairs: Vec<(f64, f64)> = (0..g.size())
        .map(|v| {
            let d = compute_distances(&g, v);
            (closeness::sum_of_distances(&d), compute_closeness(&g, false)[v])
        })
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    for w in pairs.windows(2) {
        assert!(w[1].1 <= w[0].1);
    }
}

#[test]
fn test_star_center_is_most_central() {
    let g = matrix("0111\n1000\n1000\n1000");
    let scores = compute_closeness(&g, true);
    assert_eq!(scores[0], 1.0);
    assert!((scores[1] - 3.0 / 5.0).abs() < 1e-12);
}

#[test]
fn test_parallel_matches_sequential() {
    let g = matrix("0120300\n0013000\n2004001\n1110000\n0000012\n0900100\n1000010");
    for measure in [Measure::Closeness, Measure::Harmonic] {
        for normalize in [false, true] {
            let base = CentralityOptions {
                measure,
                normalize,
                ..CentralityOptions::default()
            };
            let seq = CentralityEngine::new(base).compute(&g).unwrap();
            let par = CentralityEngine::new(CentralityOptions {
                parallel: true,
                ..base
            })
            .compute(&g)
            .unwrap();
            assert_eq!(seq, par);
        }
    }
}

#[test]
fn test_harmonic_triangle_and_isolated() {
    let engine = CentralityEngine::new(CentralityOptions {
        measure: Measure::Harmonic,
        ..CentralityOptions::default()
    });
    assert_eq!(engine.compute(&matrix("011\n101\n110")).unwrap(), vec![2.0; 3]);
    assert_eq!(
        engine.compute(&matrix("010\n100\n000")).unwrap(),
        vec![1.0, 1.0, 0.0]
    );
}
