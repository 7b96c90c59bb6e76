//! Best-score persistence
//!
//! The single persisted value is the best score, under one key. The store
//! is best-effort: failures are logged and swallowed so the in-memory
//! score display keeps working without it.

use std::collections::HashMap;

use crate::sim::GameEvent;

/// Store key for the best score
pub const BEST_SCORE_KEY: &str = "BEST";

/// Abstract integer key/value store
pub trait ScoreStore {
    fn get_integer(&mut self, key: &str) -> Option<u32>;
    fn set_integer(&mut self, key: &str, value: u32);
}

/// Read the persisted best score, defaulting to zero
pub fn load_best_score(store: &mut dyn ScoreStore) -> u32 {
    match store.get_integer(BEST_SCORE_KEY) {
        Some(best) => {
            log::info!("loaded best score {best}");
            best
        }
        None => {
            log::info!("no best score stored, starting fresh");
            0
        }
    }
}

/// Forward a simulation event to the store. Only new bests are written;
/// everything else is the display layer's business.
pub fn persist_event(store: &mut dyn ScoreStore, event: &GameEvent) {
    if let GameEvent::BestScoreChanged(best) = event {
        store.set_integer(BEST_SCORE_KEY, *best);
    }
}

/// In-memory store used natively and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u32>,
}

impl ScoreStore for MemoryStore {
    fn get_integer(&mut self, key: &str) -> Option<u32> {
        self.values.get(key).copied()
    }

    fn set_integer(&mut self, key: &str, value: u32) {
        self.values.insert(key.to_string(), value);
    }
}

/// LocalStorage-backed store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorageStore {
    fn get_integer(&mut self, key: &str) -> Option<u32> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()?;
        storage.get_item(key).ok().flatten().and_then(|s| s.parse().ok())
    }

    fn set_integer(&mut self, key: &str, value: u32) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        match storage {
            Some(storage) => {
                let _ = storage.set_item(key, &value.to_string());
            }
            None => log::warn!("local storage unavailable, best score not saved"),
        }
    }
}
