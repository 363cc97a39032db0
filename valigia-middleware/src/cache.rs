use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::Mutex;

use valigia_core::{Fingerprint, RankedResult};

/// Fingerprint → ranked-result store.
///
/// The store knows nothing about providers or ranking; it maps an opaque
/// key to a blob with an expiry, so implementations can be in-memory or
/// networked interchangeably. TTL is supplied per `put` because expiry is
/// domain-dependent (flight prices move faster than hotel inventory).
#[async_trait]
pub trait ResultCache: Send + Sync {
    /// Fetch a live entry, if any. Expired entries behave as misses.
    async fn get(&self, key: &Fingerprint) -> Option<RankedResult>;
    /// Store an entry with the given time-to-live.
    async fn put(&self, key: Fingerprint, value: RankedResult, ttl: Duration);
}

struct Entry {
    value: Arc<RankedResult>,
    expires_at: Instant,
}

/// Process-local LRU store with per-entry TTL, expiry enforced on read.
pub struct InMemoryCache {
    inner: Mutex<LruCache<Fingerprint, Entry>>,
}

impl InMemoryCache {
    /// Create a store holding at most `capacity` result sets.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        // Avoid zero capacity panics
        let cap = capacity.max(1);
        let cap_nz = std::num::NonZeroUsize::new(cap).unwrap_or(std::num::NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(cap_nz)),
        }
    }
}

#[async_trait]
impl ResultCache for InMemoryCache {
    async fn get(&self, key: &Fingerprint) -> Option<RankedResult> {
        let mut guard = self.inner.lock().await;
        if let Some(entry) = guard.get(key)
            && Instant::now() <= entry.expires_at
        {
            return Some((*entry.value).clone());
        }
        // If expired, evict it and report a miss.
        guard.pop(key).and_then(|_| None)
    }

    async fn put(&self, key: Fingerprint, value: RankedResult, ttl: Duration) {
        let expires_at = Instant::now() + ttl;
        let mut guard = self.inner.lock().await;
        guard.put(
            key,
            Entry {
                value: Arc::new(value),
                expires_at,
            },
        );
    }
}
