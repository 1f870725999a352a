use std::slice;

use tokio::sync::oneshot;

use crate::error::BatchError;

/// A load submitted to the [`LoaderWorker`](crate::loader_worker::LoaderWorker)
/// by its parent [`Loader`](crate::Loader), with single and many variants for
/// convenience.
///
/// Each variant carries the oneshot channel on which the worker answers once
/// the keys are available in the cache, or once the batch that contained them
/// has failed.
#[derive(Debug)]
pub enum LoadRequest<K, V> {
    One(K, oneshot::Sender<Result<Option<V>, BatchError>>),
    Many(Vec<K>, oneshot::Sender<Result<Vec<Option<V>>, BatchError>>),
}

impl<K, V> LoadRequest<K, V>
where
    V: Send + Clone + std::fmt::Debug,
{
    pub fn keys(&self) -> &[K] {
        match self {
            LoadRequest::One(ref key, _) => slice::from_ref(key),
            LoadRequest::Many(ref keys, _) => keys,
        }
    }

    /// Resolves the request with cached values, one per requested key in
    /// request order. `None` entries mean the key had no matching row.
    pub fn send_response<'a, I>(self, values: I)
    where
        I: IntoIterator<Item = Option<&'a V>>,
        V: Send + 'a,
    {
        match self {
            LoadRequest::One(_, response_tx) => {
                let response = values.into_iter().next().flatten().cloned();
                if let Err(e) = response_tx.send(Ok(response)) {
                    tracing::error!(?e, "receiver dropped");
                }
            }
            LoadRequest::Many(_, response_tx) => {
                let response = values.into_iter().map(|opt| opt.cloned()).collect::<Vec<_>>();
                if let Err(e) = response_tx.send(Ok(response)) {
                    tracing::error!(?e, "receiver dropped");
                }
            }
        }
    }

    /// Fails the request with the error shared by its whole batch.
    pub fn send_error(self, error: BatchError) {
        match self {
            LoadRequest::One(_, response_tx) => {
                if let Err(e) = response_tx.send(Err(error)) {
                    tracing::error!(?e, "receiver dropped");
                }
            }
            LoadRequest::Many(_, response_tx) => {
                if let Err(e) = response_tx.send(Err(error)) {
                    tracing::error!(?e, "receiver dropped");
                }
            }
        }
    }
}
