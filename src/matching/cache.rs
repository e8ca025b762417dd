//! Time-bounded signature memoization.

use crate::model::{ItemTypeId, Signature};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::{Duration, Instant};

/// Clock abstraction so expiry is testable without wall-clock sleeps.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// Production clock backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Deterministic clock for tests: time only moves when advanced.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    /// Create a manual clock anchored at the current instant.
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    /// Advance the clock by `delta`.
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += delta;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct CacheEntry {
    signature: Signature,
    expires_at: Instant,
}

/// Time-expiring memoization of computed signatures.
///
/// Keyed by [`ItemTypeId`] identity only — never by stack instance, count,
/// or metadata — since a signature depends only on the type's catalog
/// membership and the static configuration. Entries silently expire after
/// the TTL and are recomputed on next access, which bounds staleness after a
/// catalog or config change without any explicit invalidation API. Every
/// recompute also sweeps other expired entries, so the map never outgrows
/// the set of recently-seen item types.
///
/// Internally synchronized: concurrent `get_or_compute` calls for the same
/// uncached key may race to compute, which is fine — the computation is a
/// pure function and the last writer wins.
pub struct SignatureCache {
    entries: RwLock<HashMap<ItemTypeId, CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl SignatureCache {
    /// Create a cache with the given TTL, using the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Create a cache with an injected clock.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Return the cached signature for `item`, computing and storing it if
    /// absent or expired.
    pub fn get_or_compute(
        &self,
        item: &ItemTypeId,
        compute: impl FnOnce() -> Signature,
    ) -> Signature {
        let now = self.clock.now();

        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(entry) = entries.get(item) {
                if entry.expires_at > now {
                    return entry.signature.clone();
                }
            }
        }

        let signature = compute();
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        // Sweep while we hold the write lock anyway, so entries for item
        // types that stop appearing do not linger past their TTL.
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            item.clone(),
            CacheEntry {
                signature: signature.clone(),
                expires_at: now + self.ttl,
            },
        );
        signature
    }

    /// Number of entries currently stored. May include expired entries that
    /// no recompute has swept yet.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for SignatureCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureCache")
            .field("len", &self.len())
            .field("ttl", &self.ttl)
            .finish()
    }
}
