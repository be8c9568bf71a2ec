//! Threshold-keyed result cache with write-based TTL and LRU eviction

use crate::error::Result;
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// A cached director list plus its insertion timestamp
///
/// Entries are immutable once inserted; a hit clones the `Arc`, never the
/// list. Timestamps are `tokio::time::Instant` so TTL behavior is driven by
/// a controllable clock in tests (`tokio::time::pause`).
struct CacheEntry {
    directors: Arc<Vec<String>>,
    created_at: Instant,
}

/// Entry map plus recency order (front = most recently used)
struct CacheInner {
    entries: HashMap<u32, CacheEntry>,
    recency: VecDeque<u32>,
}

enum Lookup {
    Fresh(Arc<Vec<String>>),
    Expired,
    Miss,
}

/// Memoizes director lists per threshold
///
/// - **Expiry** is write-based: an entry is valid until `created_at + ttl`
///   regardless of read activity, and expires whole.
/// - **Capacity** is bounded by `max_entries`; inserting beyond it evicts
///   the least-recently-used threshold. Hits refresh recency.
/// - **Concurrency**: the compute future runs outside the lock, so calls for
///   different thresholds never serialize behind each other. Two concurrent
///   first-time calls for the same threshold may both compute (no request
///   coalescing); the later insert simply refreshes the entry.
pub struct ThresholdCache {
    ttl: Duration,
    max_entries: usize,
    inner: Mutex<CacheInner>,
}

impl ThresholdCache {
    /// Create a cache with the given entry TTL and capacity bound
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            ttl,
            max_entries,
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                recency: VecDeque::new(),
            }),
        }
    }

    /// Look up a threshold, returning the stored value when fresh
    ///
    /// A hit moves the entry to the front of the recency order. An expired
    /// entry is removed and reported as a miss.
    pub async fn get(&self, threshold: u32) -> Option<Arc<Vec<String>>> {
        let mut inner = self.inner.lock().await;

        let lookup = match inner.entries.get(&threshold) {
            Some(entry) if entry.created_at.elapsed() < self.ttl => {
                Lookup::Fresh(Arc::clone(&entry.directors))
            }
            Some(_) => Lookup::Expired,
            None => Lookup::Miss,
        };

        match lookup {
            Lookup::Fresh(directors) => {
                inner.recency.retain(|key| *key != threshold);
                inner.recency.push_front(threshold);
                Some(directors)
            }
            Lookup::Expired => {
                tracing::debug!(threshold, "cache entry expired, evicting");
                inner.entries.remove(&threshold);
                inner.recency.retain(|key| *key != threshold);
                None
            }
            Lookup::Miss => None,
        }
    }

    /// Insert a value with a fresh timestamp, evicting LRU entries beyond
    /// capacity
    pub async fn insert(&self, threshold: u32, directors: Arc<Vec<String>>) {
        let mut inner = self.inner.lock().await;

        let replaced = inner
            .entries
            .insert(
                threshold,
                CacheEntry {
                    directors,
                    created_at: Instant::now(),
                },
            )
            .is_some();
        if replaced {
            inner.recency.retain(|key| *key != threshold);
        }
        inner.recency.push_front(threshold);

        while inner.entries.len() > self.max_entries {
            match inner.recency.pop_back() {
                Some(lru) => {
                    inner.entries.remove(&lru);
                    tracing::debug!(threshold = lru, "evicted least-recently-used cache entry");
                }
                None => break,
            }
        }
    }

    /// Return the cached value for `threshold`, computing and storing it on
    /// a miss or after expiry
    ///
    /// The compute future runs without holding the cache lock; its error is
    /// propagated without poisoning any state.
    pub async fn get_or_compute<F, Fut>(
        &self,
        threshold: u32,
        compute: F,
    ) -> Result<Arc<Vec<String>>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<String>>>,
    {
        if let Some(hit) = self.get(threshold).await {
            tracing::debug!(threshold, "threshold cache hit");
            return Ok(hit);
        }

        tracing::debug!(threshold, "threshold cache miss, computing");
        let directors = Arc::new(compute().await?);
        self.insert(threshold, Arc::clone(&directors)).await;
        Ok(directors)
    }

    /// Number of live entries (expired entries linger until touched)
    pub async fn len(&self) -> usize {
        self.inner.lock().await.entries.len()
    }

    /// True when the cache holds no entries
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
