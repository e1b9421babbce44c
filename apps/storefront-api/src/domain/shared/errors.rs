//! Store errors.

use thiserror::Error;

/// Errors surfaced by a repository.
///
/// The repository never retries; any underlying store fault propagates to the
/// caller as a single error variant. "Row not found" is not an error — the
/// repository operations model absence with `Option`/`bool` instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying store failed (connectivity, constraint violation, ...).
    #[error("store error: {0}")]
    Database(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_cause() {
        let err = StoreError::Database("UNIQUE constraint failed: item.id".to_string());
        assert_eq!(
            err.to_string(),
            "store error: UNIQUE constraint failed: item.id"
        );
    }
}
