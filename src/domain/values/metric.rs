use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance metric used to rank candidates against a query vector.
///
/// Every variant maps to a `(vector, vector) -> distance` computation where
/// smaller means more similar, so the ranking code never branches on the
/// metric's direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Cosine,
    Euclidean,
    /// Negated dot product, so that larger raw similarity sorts first.
    DotProduct,
}

impl Metric {
    /// Distance between two equal-length vectors.
    ///
    /// Callers are expected to have checked lengths and finiteness already;
    /// this only fails for inputs the metric itself cannot handle
    /// (zero-norm vectors under cosine).
    pub fn distance(&self, a: &[f32], b: &[f32]) -> Result<f64, DomainError> {
        debug_assert_eq!(a.len(), b.len());
        match self {
            Metric::Cosine => cosine_distance(a, b),
            Metric::Euclidean => Ok(euclidean_distance(a, b)),
            Metric::DotProduct => Ok(-dot(a, b)),
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Cosine
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Cosine => write!(f, "cosine"),
            Metric::Euclidean => write!(f, "euclidean"),
            Metric::DotProduct => write!(f, "dot"),
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cosine" => Ok(Metric::Cosine),
            "euclidean" | "l2" => Ok(Metric::Euclidean),
            "dot" | "dotproduct" => Ok(Metric::DotProduct),
            _ => Err(format!("Unknown metric: {s}")),
        }
    }
}

fn dot(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| *x as f64 * *y as f64)
        .sum()
}

/// `1 - dot(a,b) / (|a| * |b|)`, clamped at zero so floating-point noise
/// never produces a negative distance for identical vectors.
fn cosine_distance(a: &[f32], b: &[f32]) -> Result<f64, DomainError> {
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let x = *x as f64;
        let y = *y as f64;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return Err(DomainError::DegenerateVector);
    }
    Ok((1.0 - dot / denom).max(0.0))
}

fn euclidean_distance(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = *x as f64 - *y as f64;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}
