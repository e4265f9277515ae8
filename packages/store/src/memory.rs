use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::session::KeyValueStore;

#[derive(Clone, Debug)]
struct Entry {
    value: String,
    expires_at: Option<u64>,
}

/// In-memory KeyValueStore for testing and non-browser targets.
///
/// Expiry is checked on read against the wall clock plus an offset that tests
/// move forward with [`MemoryStore::advance`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
    offset_ms: Arc<AtomicU64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move this store's clock forward.
    pub fn advance(&self, by: Duration) {
        let ms = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.offset_ms.fetch_add(ms, Ordering::SeqCst);
    }

    fn now_ms(&self) -> u64 {
        current_timestamp_ms().saturating_add(self.offset_ms.load(Ordering::SeqCst))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let now = self.now_ms();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.get(key)?;
        if entry.expires_at.is_some_and(|at| at <= now) {
            entries.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    fn set(&self, key: &str, value: &str, ttl: Option<Duration>) {
        let expires_at = ttl.map(|ttl| {
            let ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
            self.now_ms().saturating_add(ms)
        });
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                key.to_string(),
                Entry {
                    value: value.to_string(),
                    expires_at,
                },
            );
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Milliseconds since the Unix epoch.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn current_timestamp_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn current_timestamp_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("k").is_none());

        store.set("k", "v", None);
        assert_eq!(store.get("k").as_deref(), Some("v"));

        store.set("k", "w", None);
        assert_eq!(store.get("k").as_deref(), Some("w"));

        store.remove("k");
        assert!(store.get("k").is_none());
    }

    #[test]
    fn entries_expire_after_ttl() {
        let store = MemoryStore::new();
        store.set("short", "v", Some(Duration::from_secs(60)));
        store.set("forever", "v", None);

        store.advance(Duration::from_secs(59));
        assert!(store.get("short").is_some());

        store.advance(Duration::from_secs(1));
        assert!(store.get("short").is_none());
        assert!(store.get("forever").is_some());
    }

    #[test]
    fn clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v", Some(Duration::from_secs(10)));
        assert_eq!(other.get("k").as_deref(), Some("v"));

        other.advance(Duration::from_secs(10));
        assert!(store.get("k").is_none());
    }
}
