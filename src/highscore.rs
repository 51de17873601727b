//! High score tracking
//!
//! Persisted to a session-scoped key/value store (browser `sessionStorage`)
//! under a single key. The stored value only ever goes up.

use std::collections::HashMap;

/// Storage key shared with the page
pub const STORAGE_KEY: &str = "highScore";

/// Minimal string key/value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and the native build
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Result of comparing a score against the stored best
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighScoreUpdate {
    /// Best score after reconciliation
    pub best: u32,
    /// The score just beat the previous best
    pub new_record: bool,
}

/// High score backed by a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct HighScore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> HighScore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored best; missing or unreadable values count as 0
    pub fn stored(&self) -> u32 {
        let Some(raw) = self.store.get(STORAGE_KEY) else {
            return 0;
        };
        match serde_json::from_str::<u32>(raw.trim()) {
            Ok(best) => best,
            Err(e) => {
                log::warn!("Ignoring unreadable high score {:?}: {}", raw, e);
                0
            }
        }
    }

    /// Compare `score` with the stored best, writing it back if it is higher
    pub fn reconcile(&mut self, score: u32) -> HighScoreUpdate {
        let best = self.stored();
        if score <= best {
            return HighScoreUpdate {
                best,
                new_record: false,
            };
        }

        match serde_json::to_string(&score) {
            Ok(value) => self.store.set(STORAGE_KEY, &value),
            Err(e) => log::warn!("Failed to encode high score: {}", e),
        }
        log::info!("New high score: {} (was {})", score, best);
        HighScoreUpdate {
            best: score,
            new_record: true,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_is_zero() {
        let scores = HighScore::new(MemoryStore::new());
        assert_eq!(scores.stored(), 0);
    }

    #[test]
    fn test_garbage_value_is_zero() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "lots");
        assert_eq!(HighScore::new(store).stored(), 0);
    }

    #[test]
    fn test_reads_plain_integer() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "12");
        assert_eq!(HighScore::new(store).stored(), 12);
    }

    #[test]
    fn test_zero_score_never_written() {
        let mut scores = HighScore::new(MemoryStore::new());
        let update = scores.reconcile(0);

        assert_eq!(
            update,
            HighScoreUpdate {
                best: 0,
                new_record: false,
            }
        );
        assert_eq!(scores.store().get(STORAGE_KEY), None);
    }

    #[test]
    fn test_only_higher_scores_written() {
        let mut scores = HighScore::new(MemoryStore::new());

        assert!(scores.reconcile(5).new_record);
        assert_eq!(scores.store().get(STORAGE_KEY).as_deref(), Some("5"));

        let update = scores.reconcile(3);
        assert_eq!(
            update,
            HighScoreUpdate {
                best: 5,
                new_record: false,
            }
        );
        assert_eq!(scores.stored(), 5);

        // Tying is not a new record
        assert!(!scores.reconcile(5).new_record);
        assert!(scores.reconcile(6).new_record);
        assert_eq!(scores.stored(), 6);
    }
}
