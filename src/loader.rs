use std::ops::Drop;
use std::{collections::HashMap, fmt::Debug};

use tokio::sync::{mpsc, oneshot};

use crate::{
    batch_function::BatchFunction, error::BatchError, load_request::LoadRequest,
    loader_worker::LoaderWorker,
};

/// Batch loads values from some expensive resource, primarily intended for
/// mitigating GraphQL's N+1 problem.
///
/// Callers invoke [`Loader::load`] and [`Loader::load_many`] to fetch values
/// from the underlying resource or the loader's cache. The cache is scoped to
/// the loader instance and is never invalidated: a loader is meant to live
/// for exactly one request, so once a key resolves (including resolving to
/// "no matching row"), every later load of that key observes the same value
/// without another fetch.
///
/// The `Loader` struct acts as an intermediary between the async domain in
/// which `load` calls are invoked and the pseudo-single-threaded domain of
/// the `LoaderWorker`. Callers can invoke the `Loader` from multiple parallel
/// tasks, and the loader will enqueue the requested operations on the request
/// queue for processing by its `LoaderWorker`. The worker processes requests
/// sequentially and provides results via response oneshot channels back to
/// the Loader. Loads enqueued while the worker is parked are batched into a
/// single `BatchFunction` invocation.
pub struct Loader<K, V>
where
    K: 'static + Eq + Debug + Copy + Send,
    V: 'static + Send + Debug + Clone,
{
    request_tx: mpsc::UnboundedSender<LoadRequest<K, V>>,
    load_task_handle: tokio::task::JoinHandle<()>,
}

impl<K, V> Drop for Loader<K, V>
where
    K: 'static + Eq + Debug + Copy + Send,
    V: 'static + Send + Debug + Clone,
{
    fn drop(&mut self) {
        self.load_task_handle.abort();
    }
}

impl<K, V> Loader<K, V>
where
    K: 'static + Eq + Debug + Copy + std::hash::Hash + Send + Sync,
    V: 'static + Send + Debug + Clone,
{
    /// Creates a new Loader for the provided BatchFunction and Context type.
    ///
    /// Note: the batch function is passed in as a marker for type inference.
    pub fn new<F, ContextT>(_: F, context: ContextT) -> Self
    where
        ContextT: Send + Sync + 'static,
        F: 'static + BatchFunction<K, V, Context = ContextT> + Send,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            request_tx: tx,
            load_task_handle: tokio::task::spawn(
                LoaderWorker::<K, V, F, HashMap<K, V>, ContextT>::new(HashMap::new(), rx, context)
                    .start(),
            ),
        }
    }

    /// Loads a value from the underlying resource.
    ///
    /// Returns `Ok(None)` when storage has no matching row for the key; this
    /// is the expected answer for an absent key, not an error. Returns `Err`
    /// only when the batch containing this key hit a genuine storage fault,
    /// in which case the key stays uncached and may be retried.
    ///
    /// If the value is already resolved in the loader cache, it is returned
    /// as soon as the request is processed. Otherwise the requested key is
    /// enqueued for batch loading in the next loader execution frame.
    pub async fn load(&self, key: K) -> Result<Option<V>, BatchError> {
        let (response_tx, response_rx) = oneshot::channel();
        self.request_tx.send(LoadRequest::One(key, response_tx)).unwrap();
        response_rx.await.unwrap()
    }

    /// Loads many values at once.
    ///
    /// Returns one entry per requested key, in request order, with `Ok`
    /// entries of `None` for keys that have no matching row. A storage fault
    /// fails the whole call, like [`Loader::load`].
    pub async fn load_many(&self, keys: Vec<K>) -> Result<Vec<Option<V>>, BatchError> {
        let (response_tx, response_rx) = oneshot::channel();
        self.request_tx.send(LoadRequest::Many(keys, response_tx)).unwrap();
        response_rx.await.unwrap()
    }
}
