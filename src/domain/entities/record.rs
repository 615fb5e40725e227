use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

/// A single corpus entry: an article identifier and its embedding.
///
/// Identifiers are opaque and not required to be unique; duplicate ids are
/// ranked as distinct candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub vector: Vec<f32>,
}

impl Record {
    pub fn new(id: impl Into<String>, vector: Vec<f32>) -> Self {
        Self {
            id: id.into(),
            vector,
        }
    }
}

/// One ranked retrieval result. Smaller distance means more similar.
///
/// Distances are kept at full precision here; rounding for display happens
/// at the serving boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub id: String,
    pub distance: f64,
}

/// Rejects empty vectors and vectors with non-finite components.
///
/// Both the store (before mutating) and the ranking engine (on the query)
/// funnel through this check, so NaN/Infinity never reach a distance
/// computation.
pub fn validate_vector(vector: &[f32]) -> Result<(), DomainError> {
    if vector.is_empty() {
        return Err(DomainError::InvalidVector("vector is empty".into()));
    }
    if vector.iter().any(|c| !c.is_finite()) {
        return Err(DomainError::InvalidVector(
            "vector contains non-finite components".into(),
        ));
    }
    Ok(())
}
