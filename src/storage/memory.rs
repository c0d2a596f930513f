//! In-memory risk storage.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use super::RiskStore;
use crate::Result;
use crate::models::{Risk, RiskState};

/// In-memory implementation of [`RiskStore`].
///
/// Records live in a `HashMap` keyed by id behind an `RwLock`, so saves
/// from parallel request tasks cannot race each other. Records are cloned
/// on the way out; nothing hands back a reference into the map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    risks: RwLock<HashMap<String, Risk>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            risks: RwLock::new(HashMap::new()),
        }
    }
}

impl RiskStore for MemoryStore {
    fn all(&self) -> Vec<Risk> {
        self.risks
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect()
    }

    fn save(&self, state: RiskState, title: &str, description: &str) -> Result<Risk> {
        let risk = Risk {
            id: Uuid::new_v4().to_string(),
            state,
            title: title.to_string(),
            description: description.to_string(),
        };
        self.risks
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(risk.id.clone(), risk.clone());
        Ok(risk)
    }

    fn get(&self, id: &str) -> Result<Option<Risk>> {
        Ok(self
            .risks
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_returns_the_input_fields_with_a_generated_id() {
        let store = MemoryStore::new();
        let risk = store.save(RiskState::Accepted, "MyTitle", "MyDescription").unwrap();

        assert!(!risk.id.is_empty());
        assert_eq!(risk.state, RiskState::Accepted);
        assert_eq!(risk.title, "MyTitle");
        assert_eq!(risk.description, "MyDescription");
    }

    #[test]
    fn sequential_saves_generate_distinct_ids() {
        let store = MemoryStore::new();
        let a = store.save(RiskState::Open, "a", "").unwrap();
        let b = store.save(RiskState::Open, "b", "").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn get_with_unknown_id_is_none_not_an_error() {
        let store = MemoryStore::new();
        assert_eq!(store.get("never-saved").unwrap(), None);
    }

    #[test]
    fn get_returns_the_record_save_returned() {
        let store = MemoryStore::new();
        let saved = store.save(RiskState::Investigating, "t", "d").unwrap();
        let fetched = store.get(&saved.id).unwrap();
        assert_eq!(fetched, Some(saved));
    }

    #[test]
    fn all_is_empty_before_any_save() {
        let store = MemoryStore::new();
        assert!(store.all().is_empty());
    }

    #[test]
    fn all_returns_exactly_the_saved_records() {
        let store = MemoryStore::new();
        for i in 0..3 {
            store.save(RiskState::Open, &format!("risk {i}"), "").unwrap();
        }
        assert_eq!(store.all().len(), 3);
    }

    #[test]
    fn saves_from_parallel_threads_all_land() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store.save(RiskState::Open, &format!("risk {i}"), "").unwrap()
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.all().len(), 8);
    }
}
