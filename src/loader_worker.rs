use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

use futures::future::FutureExt;
use tokio::sync::mpsc;
use tracing::{span, Level};

use crate::{batch_function::BatchFunction, cache::Cache, load_request::LoadRequest};

/// A `LoaderWorker` is the "single-thread" worker task that actually does the
/// loading work.
///
/// Once started, it runs in a loop until the parent Loader aborts its
/// `JoinHandle` or drops the request queue tx channel.
///
/// The worker can be in one of three states during its lifetime:
///
/// 1. Waiting for requests.
/// 2. Flushing the request queue and staging keys for loading.
/// 3. Executing its batch function.
///
/// One cycle through this loop may be called an "execution frame". Because
/// state (2) drains every request that is already queued before state (3)
/// runs, all loads issued during one synchronous resolution wave coalesce
/// into a single batch.
///
/// In state (1), the worker awaits any message on the request queue channel,
/// idling until work arrives.
///
/// In state (2), the worker synchronously pulls requests from the queue until
/// it would block. Requests whose keys are all already resolved (cached, or
/// known to have no matching row) are answered immediately on their response
/// channel; the rest have their unresolved keys staged for loading.
///
/// In state (3), the worker deduplicates the staged keys, preserving
/// first-occurrence order, and invokes its `BatchFunction` once with that key
/// sequence. On success the returned pairs are inserted into the cache, keys
/// the function did not return are recorded as having no row, and every
/// pending request is resolved from the cache (`None` for rowless keys). On
/// failure every pending request receives the same shared error and no key
/// from the batch is cached, leaving them free to be retried by a later load.
pub struct LoaderWorker<K, V, F, CacheT, ContextT>
where
    K: 'static + Eq + Hash + Debug + Copy + Send + Sync,
    V: 'static + Send + Debug + Clone,
    F: 'static + BatchFunction<K, V, Context = ContextT> + Send,
    CacheT: Cache,
    ContextT: Send + Sync + 'static,
{
    cache: CacheT,
    request_rx: mpsc::UnboundedReceiver<LoadRequest<K, V>>,
    keys_to_load: Vec<K>,
    known_missing: HashSet<K>,
    pending_requests: Vec<LoadRequest<K, V>>,
    context: ContextT,
    phantom_batch_function: PhantomData<F>,
    debug_name: &'static str,
}

impl<K, V, F, CacheT, ContextT> LoaderWorker<K, V, F, CacheT, ContextT>
where
    K: 'static + Eq + Hash + Debug + Copy + Send + Sync,
    V: 'static + Send + Debug + Clone,
    F: 'static + BatchFunction<K, V, Context = ContextT> + Send,
    CacheT: Cache<K = K, V = V>,
    ContextT: Send + Sync + 'static,
{
    pub fn new(
        cache: CacheT,
        request_rx: mpsc::UnboundedReceiver<LoadRequest<K, V>>,
        context: ContextT,
    ) -> Self {
        Self {
            cache,
            request_rx,
            keys_to_load: Vec::new(),
            known_missing: HashSet::new(),
            pending_requests: Vec::new(),
            context,
            phantom_batch_function: PhantomData,
            debug_name: std::any::type_name::<(K, V)>(),
        }
    }

    pub async fn start(mut self) {
        let span = span!(Level::TRACE, "LoaderWorker", kv = self.debug_name);
        let _enter = span.enter();

        loop {
            // Async await until we receive the first request.
            match self.request_rx.recv().await {
                None => {
                    tracing::info!("Tx channel closed. Terminating LoaderWorker.");
                    return;
                }
                Some(request) => self.stage_request(request),
            }
            // Flush the remainder of the queue before executing the load, so
            // that every load issued in the current wave joins this batch.
            while let Some(Some(request)) = self.request_rx.recv().now_or_never() {
                self.stage_request(request);
            }
            if !self.pending_requests.is_empty() {
                self.execute_load().await;
            }
        }
    }

    #[tracing::instrument(skip(self))]
    fn stage_request(&mut self, request: LoadRequest<K, V>) {
        let cached = self.cache.get_key_vals(request.keys());
        let keys_to_load = cached
            .iter()
            .filter_map(|(k, v)| {
                if v.is_none() && !self.known_missing.contains(*k) {
                    Some(**k)
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();
        tracing::debug!(requested_keys = ?request.keys(), ?keys_to_load);
        if keys_to_load.is_empty() {
            let values = cached.into_iter().map(|(_k, v)| v).collect::<Vec<_>>();
            request.send_response(values);
        } else {
            self.keys_to_load.extend(&keys_to_load);
            self.pending_requests.push(request);
        }
    }

    #[tracing::instrument(skip(self))]
    async fn execute_load(&mut self) {
        let mut seen = HashSet::with_capacity(self.keys_to_load.len());
        self.keys_to_load.retain(|key| seen.insert(*key));

        match F::load(&self.keys_to_load, &self.context).await {
            Ok(loaded_keyvals) => {
                tracing::debug!(?loaded_keyvals);
                let loaded_keys = loaded_keyvals.iter().map(|(k, _v)| *k).collect::<HashSet<_>>();
                for key in self.keys_to_load.drain(..) {
                    if !loaded_keys.contains(&key) {
                        self.known_missing.insert(key);
                    }
                }
                self.cache.insert_many(loaded_keyvals);

                for request in self.pending_requests.drain(..) {
                    let values = self.cache.get(request.keys());
                    request.send_response(values);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "batch function failed, failing pending loads");
                self.keys_to_load.clear();
                let error = Arc::new(e);
                for request in self.pending_requests.drain(..) {
                    request.send_error(Arc::clone(&error));
                }
            }
        }
    }
}
