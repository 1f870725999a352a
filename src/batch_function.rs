use async_trait::async_trait;

use crate::error::StoreError;

/// A `BatchFunction` defines how a [`Loader`](crate::Loader) fetches one
/// grouped batch of values from the underlying storage service. It receives
/// the deduplicated slice of keys requested during the loader's most recent
/// execution frame, plus a user defined context (typically a shared storage
/// handle).
///
/// The function returns loaded key/value pairs, in any order, and is not
/// required to produce a pair for every requested key: requesters of keys
/// that are absent from the result receive `None`, which is how "no matching
/// row" is represented. A missing row is never an error.
///
/// Returning `Err` signals a genuine storage fault (connectivity, malformed
/// filter). The fault fails every load pending in the batch, and none of the
/// batch's keys are cached, so a later request for the same keys will retry.
///
/// Multiple `BatchFunction`s (and therefore loaders) can share the same
/// context through an `Arc`.
#[async_trait]
pub trait BatchFunction<K, V> {
    type Context;
    async fn load(keys: &[K], context: &Self::Context) -> Result<Vec<(K, V)>, StoreError>;
}
