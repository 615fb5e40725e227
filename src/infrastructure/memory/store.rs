//! In-memory embedding store.
//!
//! # Concurrency Model
//!
//! Copy-on-write behind a `parking_lot::RwLock`: `snapshot` clones an
//! `Arc<Vec<Record>>` under the read lock, so readers hold whichever
//! version was current when they began and never observe a partially
//! appended record. `append` takes the write lock, clones the record list,
//! pushes, and swaps the `Arc`; concurrent appends are serialized by the
//! lock, which also serializes dimension initialization on an empty store.

use crate::domain::entities::record::{validate_vector, Record};
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_store::{EmbeddingStore, Snapshot};
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug)]
struct Inner {
    records: Arc<Vec<Record>>,
    dimension: Option<usize>,
}

#[derive(Debug)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    /// An empty store. The dimension is fixed by the first append.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: Arc::new(Vec::new()),
                dimension: None,
            }),
        }
    }

    /// Bulk-constructs a store from `(id, delimited-float-string)` rows,
    /// e.g. `("Some headline", "0.12,-0.5,1.0")`.
    ///
    /// All-or-nothing: the first bad row fails the whole load and no store
    /// is produced. Row indices in errors are zero-based positions in the
    /// input iterator.
    pub fn load<I, S, T>(rows: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: AsRef<str>,
    {
        let mut records: Vec<Record> = Vec::new();
        let mut dimension: Option<usize> = None;

        for (row, (id, raw)) in rows.into_iter().enumerate() {
            let vector = parse_components(raw.as_ref(), row)?;
            validate_vector(&vector).map_err(|e| DomainError::MalformedRecord {
                row,
                reason: e.to_string(),
            })?;
            match dimension {
                None => dimension = Some(vector.len()),
                Some(expected) if vector.len() != expected => {
                    return Err(DomainError::DimensionMismatch {
                        expected,
                        got: vector.len(),
                        row: Some(row),
                    });
                }
                Some(_) => {}
            }
            records.push(Record::new(id, vector));
        }

        Ok(Self {
            inner: RwLock::new(Inner {
                records: Arc::new(records),
                dimension,
            }),
        })
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddingStore for InMemoryStore {
    fn append(&self, record: Record) -> Result<(), DomainError> {
        validate_vector(&record.vector)?;

        let mut inner = self.inner.write();
        if let Some(expected) = inner.dimension {
            if record.vector.len() != expected {
                return Err(DomainError::DimensionMismatch {
                    expected,
                    got: record.vector.len(),
                    row: None,
                });
            }
        } else {
            inner.dimension = Some(record.vector.len());
        }

        // Existing snapshots keep the old Arc; new readers see the new one.
        let mut next = Vec::with_capacity(inner.records.len() + 1);
        next.extend(inner.records.iter().cloned());
        next.push(record);
        inner.records = Arc::new(next);
        Ok(())
    }

    fn snapshot(&self) -> Snapshot {
        self.inner.read().records.clone()
    }

    fn dimension(&self) -> Option<usize> {
        self.inner.read().dimension
    }

    fn len(&self) -> usize {
        self.inner.read().records.len()
    }
}

fn parse_components(raw: &str, row: usize) -> Result<Vec<f32>, DomainError> {
    raw.split(',')
        .map(|c| {
            c.trim().parse::<f32>().map_err(|e| DomainError::MalformedRecord {
                row,
                reason: format!("bad vector component {:?}: {e}", c.trim()),
            })
        })
        .collect()
}
