//! Flat-file corpus source.
//!
//! One article per line, `id;c1,c2,...,cn` — a record delimiter between the
//! identifier and the vector, commas between vector components. Header-less;
//! blank lines are not rows and fail the load.

use crate::domain::error::DomainError;
use std::fs;
use std::path::Path;

const RECORD_DELIMITER: char = ';';

/// Reads the corpus file into `(id, raw_vector)` rows for the store to
/// parse. Splits on the first delimiter only, so identifiers may not
/// contain `;` but vectors are taken verbatim.
pub fn read_corpus_rows(path: &Path) -> Result<Vec<(String, String)>, DomainError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| DomainError::Corpus(format!("cannot read {}: {e}", path.display())))?;

    contents
        .lines()
        .enumerate()
        .map(|(row, line)| {
            let (id, raw) =
                line.split_once(RECORD_DELIMITER)
                    .ok_or_else(|| DomainError::MalformedRecord {
                        row,
                        reason: format!("missing {RECORD_DELIMITER:?} record delimiter"),
                    })?;
            Ok((id.to_string(), raw.to_string()))
        })
        .collect()
}
