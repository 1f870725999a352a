use std::sync::Arc;

use thiserror::Error;

/// Faults raised by the storage service.
///
/// "Row not found" is deliberately not represented for batch fetches: a key
/// with no matching row is answered with the relation's default value, never
/// an error. `NotFound` exists only for the command surface, where updating
/// or deleting a missing row is a caller mistake worth reporting.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend could not be reached or failed mid-query.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The requested filter could not be executed (bad column, bad key set).
    #[error("malformed filter: {0}")]
    MalformedFilter(String),

    /// A mutation referenced a row that does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

/// Error observed by every `load` call pending in a failed batch.
///
/// One storage fault fans out to all requesters of that batch, so the error
/// is reference-counted rather than cloned per caller.
pub type BatchError = Arc<StoreError>;
