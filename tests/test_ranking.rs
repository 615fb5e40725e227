use readnext::domain::entities::record::Record;
use readnext::domain::error::DomainError;
use readnext::domain::ranking::top_k;
use readnext::domain::values::metric::Metric;

fn abc_corpus() -> Vec<Record> {
    vec![
        Record::new("A", vec![1.0, 0.0]),
        Record::new("B", vec![0.0, 1.0]),
        Record::new("C", vec![1.0, 0.0]),
    ]
}

#[test]
fn test_closest_matches_with_insertion_order_tie_break() {
    // A and C are identical, so both sit at distance 0; A was inserted
    // first and must come first. B is orthogonal and excluded at k=2.
    let results = top_k(&abc_corpus(), &[1.0, 0.0], 2, Metric::Cosine).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "A");
    assert!(results[0].distance.abs() < 1e-9);
    assert_eq!(results[1].id, "C");
    assert!(results[1].distance.abs() < 1e-9);
}

#[test]
fn test_orthogonal_query_selects_the_other_axis() {
    let results = top_k(&abc_corpus(), &[0.0, 1.0], 1, Metric::Cosine).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "B");
    assert!(results[0].distance.abs() < 1e-9);
}

#[test]
fn test_distances_are_non_decreasing() {
    let records = vec![
        Record::new("far", vec![-1.0, 0.2]),
        Record::new("near", vec![0.9, 0.1]),
        Record::new("mid", vec![0.5, 0.8]),
    ];
    let results = top_k(&records, &[1.0, 0.0], 3, Metric::Cosine).unwrap();
    assert_eq!(results.len(), 3);
    for pair in results.windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
    }
    assert_eq!(results[0].id, "near");
}

#[test]
fn test_k_clamps_to_record_count() {
    let results = top_k(&abc_corpus(), &[1.0, 0.0], 8, Metric::Cosine).unwrap();
    assert_eq!(results.len(), 3);
}

#[test]
fn test_k_zero_returns_empty() {
    let results = top_k(&abc_corpus(), &[1.0, 0.0], 0, Metric::Cosine).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_empty_corpus_returns_empty_not_error() {
    let results = top_k(&[], &[1.0, 0.0], 5, Metric::Cosine).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_query_dimension_mismatch_is_an_error() {
    let err = top_k(&abc_corpus(), &[1.0, 0.0, 0.0], 2, Metric::Cosine).unwrap_err();
    assert!(matches!(
        err,
        DomainError::DimensionMismatch {
            expected: 2,
            got: 3,
            row: None
        }
    ));
}

#[test]
fn test_empty_query_is_invalid() {
    let err = top_k(&abc_corpus(), &[], 2, Metric::Cosine).unwrap_err();
    assert!(matches!(err, DomainError::InvalidVector(_)));
}

#[test]
fn test_non_finite_query_is_invalid() {
    let err = top_k(&abc_corpus(), &[f32::NAN, 0.0], 2, Metric::Cosine).unwrap_err();
    assert!(matches!(err, DomainError::InvalidVector(_)));

    let err = top_k(&abc_corpus(), &[f32::NEG_INFINITY, 0.0], 2, Metric::Cosine).unwrap_err();
    assert!(matches!(err, DomainError::InvalidVector(_)));
}

#[test]
fn test_zero_norm_query_fails_under_cosine() {
    let err = top_k(&abc_corpus(), &[0.0, 0.0], 2, Metric::Cosine).unwrap_err();
    assert!(matches!(err, DomainError::DegenerateVector));
}

#[test]
fn test_zero_norm_query_is_fine_under_euclidean() {
    let results = top_k(&abc_corpus(), &[0.0, 0.0], 3, Metric::Euclidean).unwrap();
    assert_eq!(results.len(), 3);
    // All three unit vectors are at distance 1 from the origin; insertion
    // order decides.
    assert_eq!(results[0].id, "A");
    assert_eq!(results[1].id, "B");
    assert_eq!(results[2].id, "C");
}

#[test]
fn test_euclidean_ranks_by_straight_line_distance() {
    let records = vec![
        Record::new("off", vec![3.0, 4.0]),
        Record::new("close", vec![0.1, 0.0]),
    ];
    let results = top_k(&records, &[0.0, 0.0], 2, Metric::Euclidean).unwrap();
    assert_eq!(results[0].id, "close");
    assert!((results[1].distance - 5.0).abs() < 1e-9);
}

#[test]
fn test_dot_product_prefers_larger_projection() {
    // Cosine would tie these; dot product prefers the longer vector.
    let records = vec![
        Record::new("short", vec![1.0, 0.0]),
        Record::new("long", vec![5.0, 0.0]),
    ];
    let results = top_k(&records, &[1.0, 0.0], 2, Metric::DotProduct).unwrap();
    assert_eq!(results[0].id, "long");
}

#[test]
fn test_full_precision_ranking_survives_display_rounding() {
    // Two candidates whose distances agree to 3 decimals but differ at full
    // precision: the engine must still order them by the real values.
    let records = vec![
        Record::new("slightly_farther", vec![1.0, 0.014143]),
        Record::new("slightly_nearer", vec![1.0, 0.014142]),
    ];
    let results = top_k(&records, &[1.0, 0.0], 2, Metric::Cosine).unwrap();
    assert_eq!(results[0].id, "slightly_nearer");
    assert!(results[0].distance < results[1].distance);
}
