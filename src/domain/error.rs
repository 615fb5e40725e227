use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("malformed corpus record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    #[error("{}", dimension_mismatch_msg(.expected, .got, .row))]
    DimensionMismatch {
        expected: usize,
        got: usize,
        row: Option<usize>,
    },

    #[error("invalid vector: {0}")]
    InvalidVector(String),

    #[error("zero-norm vector cannot be compared under cosine distance")]
    DegenerateVector,

    #[error("embedding provider error: {0}")]
    Embedding(String),

    #[error("corpus source error: {0}")]
    Corpus(String),
}

fn dimension_mismatch_msg(expected: &usize, got: &usize, row: &Option<usize>) -> String {
    match row {
        Some(r) => format!("dimension mismatch at row {r}: expected {expected}, got {got}"),
        None => format!("dimension mismatch: expected {expected}, got {got}"),
    }
}
