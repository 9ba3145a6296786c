//! Time-boxed local cache for reference data (professions, neighborhoods).
//!
//! Each resource owns one slot in the local store holding
//! `{"data": [...], "expiry": <ms since epoch>}`. Invalidation is by time
//! only: writes to the resource do not purge the slot.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use herfa_core::clock::Clock;
use herfa_core::error::Result;
use herfa_core::storage::LocalStore;

/// Stored shape of a cache slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub data: Vec<T>,
    pub expiry: i64,
}

#[derive(Serialize)]
struct CacheEntryRef<'a, T> {
    data: &'a [T],
    expiry: i64,
}

pub struct ReferenceCache<T> {
    key: &'static str,
    ttl: Duration,
    store: Arc<dyn LocalStore>,
    clock: Arc<dyn Clock>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ReferenceCache<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(
        key: &'static str,
        ttl: Duration,
        store: Arc<dyn LocalStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            key,
            ttl,
            store,
            clock,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Returns the cached data if the slot is present, parsable and not
    /// yet expired. Corrupt or expired slots are removed.
    pub fn read(&self) -> Option<Vec<T>> {
        let raw = match self.store.get(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read cache '{}': {}", self.key, e);
                return None;
            }
        };

        let entry: CacheEntry<T> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Discarding corrupt cache '{}': {}", self.key, e);
                self.evict();
                return None;
            }
        };

        if self.clock.now_millis() < entry.expiry {
            tracing::debug!("Cache hit for '{}'", self.key);
            Some(entry.data)
        } else {
            tracing::debug!("Cache '{}' expired", self.key);
            self.evict();
            None
        }
    }

    /// Replaces the slot with `data`, expiring one TTL from now.
    pub fn write(&self, data: &[T]) -> Result<()> {
        let ttl_millis = i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX);
        let entry = CacheEntryRef {
            data,
            expiry: self.clock.now_millis().saturating_add(ttl_millis),
        };
        self.store.set(self.key, &serde_json::to_string(&entry)?)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(self.key)
    }

    /// Serves from the slot unless `force_refresh` is set or the slot misses,
    /// in which case `fetch` runs once and its result is stored.
    ///
    /// A failed store write is logged; the fetched data is still returned.
    pub async fn get_with_cache<F, Fut>(&self, force_refresh: bool, fetch: F) -> Result<Vec<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        if !force_refresh {
            if let Some(data) = self.read() {
                return Ok(data);
            }
        }

        let data = fetch().await?;
        if let Err(e) = self.write(&data) {
            tracing::warn!("Failed to store cache '{}': {}", self.key, e);
        }
        Ok(data)
    }

    fn evict(&self) {
        if let Err(e) = self.store.remove(self.key) {
            tracing::warn!("Failed to evict cache '{}': {}", self.key, e);
        }
    }
}
