//! Single-slot expiring cache for the most recent suggestion results.
//!
//! One named slot, last-write-wins. Reads never fail: an absent, corrupt,
//! or expired entry reads as empty, and corrupt or expired entries are
//! evicted on the way out.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::model::Recipe;
use crate::store::KeyValueStore;

/// Key of the one slot this cache owns.
pub const CACHE_SLOT_KEY: &str = "recipe_suggestions";

/// Maximum age before a cached result set is discarded.
pub const CACHE_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Serialize, Deserialize)]
struct CachedResult {
    recipes: Vec<Recipe>,
    /// Capture time, milliseconds since the Unix epoch.
    timestamp: u64,
}

pub struct ResultCache {
    store: Box<dyn KeyValueStore>,
    ttl: Duration,
}

impl ResultCache {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self::with_ttl(store, CACHE_TTL)
    }

    pub fn with_ttl(store: Box<dyn KeyValueStore>, ttl: Duration) -> Self {
        ResultCache { store, ttl }
    }

    /// Read the slot. Returns the cached list if it is present, parses, and
    /// is younger than the TTL; otherwise returns empty. A corrupt or
    /// expired entry is removed as a side effect. Never errors.
    pub fn load(&mut self) -> Vec<Recipe> {
        let Some(raw) = self.store.get(CACHE_SLOT_KEY) else {
            return Vec::new();
        };

        let entry: CachedResult = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(err) => {
                warn!("discarding corrupt cache entry: {err}");
                self.store.remove(CACHE_SLOT_KEY);
                return Vec::new();
            }
        };

        let age_ms = now_ms().saturating_sub(entry.timestamp);
        if age_ms >= self.ttl.as_millis() as u64 {
            debug!("cache entry expired ({age_ms}ms old)");
            self.store.remove(CACHE_SLOT_KEY);
            return Vec::new();
        }

        entry.recipes
    }

    /// Overwrite the slot with `recipes` and the current timestamp.
    /// Best-effort: a serialization or store failure is logged and swallowed.
    pub fn save(&mut self, recipes: &[Recipe]) {
        let entry = CachedResult {
            recipes: recipes.to_vec(),
            timestamp: now_ms(),
        };
        let raw = match serde_json::to_string(&entry) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("failed to serialize recipe cache: {err}");
                return;
            }
        };
        if let Err(err) = self.store.set(CACHE_SLOT_KEY, &raw) {
            warn!("failed to persist recipe cache: {err}");
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;
    use crate::store::MemoryStore;
    use std::io;

    fn sample_recipes() -> Vec<Recipe> {
        vec![Recipe {
            id: "1".to_string(),
            title: "豚汁".to_string(),
            description: "具だくさんの味噌汁".to_string(),
            ingredients: vec![],
            instructions: vec!["煮る".to_string()],
            cooking_time: 25,
            difficulty: Difficulty::Easy,
            serving_size: 4,
            tags: vec!["汁物".to_string()],
            nutrition_info: None,
            image_url: None,
            is_favorite: None,
        }]
    }

    fn entry_with_timestamp(timestamp: u64) -> String {
        serde_json::to_string(&CachedResult {
            recipes: sample_recipes(),
            timestamp,
        })
        .unwrap()
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut cache = ResultCache::new(Box::new(MemoryStore::new()));
        let recipes = sample_recipes();

        cache.save(&recipes);
        assert_eq!(cache.load(), recipes);
    }

    #[test]
    fn test_load_is_idempotent() {
        let mut cache = ResultCache::new(Box::new(MemoryStore::new()));
        cache.save(&sample_recipes());

        let first = cache.load();
        let second = cache.load();
        assert_eq!(first, second);

        let mut empty = ResultCache::new(Box::new(MemoryStore::new()));
        assert_eq!(empty.load(), empty.load());
    }

    #[test]
    fn test_empty_when_slot_absent() {
        let mut cache = ResultCache::new(Box::new(MemoryStore::new()));
        assert!(cache.load().is_empty());
    }

    #[test]
    fn test_entry_at_exact_ttl_is_evicted() {
        let mut store = MemoryStore::new();
        let boundary = now_ms() - CACHE_TTL.as_millis() as u64;
        store
            .set(CACHE_SLOT_KEY, &entry_with_timestamp(boundary))
            .unwrap();

        let mut cache = ResultCache::new(Box::new(store));
        assert!(cache.load().is_empty());
        assert!(cache.store.get(CACHE_SLOT_KEY).is_none());
    }

    #[test]
    fn test_fresh_entry_survives() {
        let mut store = MemoryStore::new();
        store
            .set(CACHE_SLOT_KEY, &entry_with_timestamp(now_ms()))
            .unwrap();

        let mut cache = ResultCache::new(Box::new(store));
        assert_eq!(cache.load(), sample_recipes());
        assert!(cache.store.get(CACHE_SLOT_KEY).is_some());
    }

    #[test]
    fn test_corrupt_entry_is_evicted() {
        let mut store = MemoryStore::new();
        store.set(CACHE_SLOT_KEY, "not json at all {").unwrap();

        let mut cache = ResultCache::new(Box::new(store));
        assert!(cache.load().is_empty());
        assert!(cache.store.get(CACHE_SLOT_KEY).is_none());
    }

    #[test]
    fn test_save_overwrites_previous_slot() {
        let mut cache = ResultCache::new(Box::new(MemoryStore::new()));
        cache.save(&sample_recipes());
        cache.save(&[]);
        assert!(cache.load().is_empty());
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "quota exceeded"))
        }

        fn remove(&mut self, _key: &str) {}
    }

    #[test]
    fn test_save_swallows_store_failure() {
        let mut cache = ResultCache::new(Box::new(FailingStore));
        cache.save(&sample_recipes());
        assert!(cache.load().is_empty());
    }
}
