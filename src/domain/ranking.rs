//! Top-K similarity ranking over a store snapshot.
//!
//! Pure, synchronous CPU work: a linear scan of the snapshot, one distance
//! per record, stable ascending sort, truncate. The scan is exact; for the
//! corpus sizes this service targets there is no index.

use crate::domain::entities::record::{validate_vector, Record, ScoredMatch};
use crate::domain::error::DomainError;
use crate::domain::values::metric::Metric;

/// Ranks `records` by distance to `query` and returns the closest `k`.
///
/// `k` larger than the record count clamps to the full count; `k == 0` and
/// an empty snapshot both yield an empty list. Ties are broken by snapshot
/// position (the sort is stable), so output is reproducible across runs
/// given identical input order.
pub fn top_k(
    records: &[Record],
    query: &[f32],
    k: usize,
    metric: Metric,
) -> Result<Vec<ScoredMatch>, DomainError> {
    validate_vector(query)?;

    if records.is_empty() {
        return Ok(Vec::new());
    }

    // Every stored record shares one dimension, so checking against the
    // first is checking against all of them.
    let dimension = records[0].vector.len();
    if query.len() != dimension {
        return Err(DomainError::DimensionMismatch {
            expected: dimension,
            got: query.len(),
            row: None,
        });
    }

    let mut scored = Vec::with_capacity(records.len());
    for record in records {
        let distance = metric.distance(query, &record.vector)?;
        scored.push(ScoredMatch {
            id: record.id.clone(),
            distance,
        });
    }

    // Stable sort on the full-precision distance; equal distances keep
    // their snapshot order. Inputs are finite so total_cmp agrees with the
    // usual ordering.
    scored.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    scored.truncate(k);
    Ok(scored)
}
