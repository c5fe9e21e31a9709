//! Request de-duplication cache keyed by resource name.
//!
//! Every caller asking for the same key shares a single in-flight request.
//! Successful outcomes stay cached for the life of the cache; failed ones are
//! evicted before any caller observes the error so the next call retries.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::{BoxFuture, FutureExt, Shared};
use tracing::{debug, warn};

/// Error type shared between all callers awaiting the same request.
pub type SharedError = Arc<dyn std::error::Error + Send + Sync>;

/// Shared, cloneable handle on one request's outcome.
type SharedFetch<T> = Shared<BoxFuture<'static, Result<T, SharedError>>>;

/// One cached request together with the generation it was created in.
struct Entry<T> {
    /// Generation stamp; eviction only removes the entry it was created for.
    generation: u64,
    /// Pending or resolved outcome.
    fetch: SharedFetch<T>,
}

/// Mutex-protected cache contents.
struct Inner<T> {
    /// Live entries by key.
    entries: HashMap<String, Entry<T>>,
    /// Next generation stamp to hand out.
    next_generation: u64,
}

/// De-duplicating memo of async requests keyed by string.
///
/// Cloning the cache yields another handle on the same entries.
pub struct RequestCache<T> {
    /// Shared state; the lock is never held across an `.await`.
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for RequestCache<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for RequestCache<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                entries: HashMap::new(),
                next_generation: 0,
            })),
        }
    }
}

impl<T> RequestCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// What: Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Return the cached outcome for `key`, running `producer` only on a miss.
    ///
    /// Inputs:
    /// - `key`: Logical resource name (e.g. `"majors"`)
    /// - `producer`: Builds the request future; invoked at most once per live entry
    ///
    /// Output:
    /// - The shared outcome: the same value (or error) every concurrent caller sees.
    ///
    /// # Errors
    /// - Propagates the producer's error to every caller sharing the request.
    ///
    /// Details:
    /// - On failure the entry is removed before the error is returned, so a later
    ///   call with the same key invokes a fresh producer.
    pub async fn get<F, Fut>(&self, key: &str, producer: F) -> Result<T, SharedError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, SharedError>> + Send + 'static,
    {
        let fetch = {
            let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(entry) = inner.entries.get(key) {
                debug!(key, "[Cache] Joining existing request");
                entry.fetch.clone()
            } else {
                let generation = inner.next_generation;
                inner.next_generation += 1;
                debug!(key, generation, "[Cache] Starting new request");
                let fetch = self.wrap(key, generation, producer());
                inner.entries.insert(
                    key.to_string(),
                    Entry {
                        generation,
                        fetch: fetch.clone(),
                    },
                );
                fetch
            }
        };
        fetch.await
    }

    /// What: Wrap a request so that a failure evicts its own cache entry.
    fn wrap<Fut>(&self, key: &str, generation: u64, request: Fut) -> SharedFetch<T>
    where
        Fut: Future<Output = Result<T, SharedError>> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        let key = key.to_string();
        async move {
            let outcome = request.await;
            if let Err(e) = &outcome {
                let mut guard = inner.lock().unwrap_or_else(PoisonError::into_inner);
                if guard
                    .entries
                    .get(&key)
                    .is_some_and(|entry| entry.generation == generation)
                {
                    guard.entries.remove(&key);
                }
                warn!(key = %key, error = %e, "[Cache] Request failed; entry evicted");
            }
            outcome
        }
        .boxed()
        .shared()
    }

    /// What: Drop the entry for `key` so the next `get` refetches.
    ///
    /// Output:
    /// - `true` when an entry was present.
    pub fn invalidate(&self, key: &str) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .remove(key)
            .is_some()
    }

    /// What: Drop every entry.
    pub fn clear(&self) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .clear();
    }

    /// What: Report whether `key` currently has a pending or resolved entry.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .contains_key(key)
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
