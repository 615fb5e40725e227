use crate::domain::entities::record::Record;
use crate::domain::error::DomainError;
use std::sync::Arc;

/// A consistent point-in-time view of the corpus. Cheap to clone and immune
/// to appends that happen after it was taken.
pub type Snapshot = Arc<Vec<Record>>;

/// The corpus of embedded articles. The store is the only component allowed
/// to mutate corpus state; everything else reads through `snapshot`.
///
/// All records in a store share one vector dimension, fixed by the first
/// record ingested. Implementations must reject appends that would break
/// that invariant without mutating anything.
pub trait EmbeddingStore: Send + Sync {
    /// Validates and adds a record. All-or-nothing: on error the store is
    /// unchanged.
    fn append(&self, record: Record) -> Result<(), DomainError>;

    /// Current records for scanning.
    fn snapshot(&self) -> Snapshot;

    /// The fixed vector dimension, or `None` while the store is empty.
    fn dimension(&self) -> Option<usize>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
