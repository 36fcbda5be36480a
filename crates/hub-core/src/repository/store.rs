//! Key-Value Store Abstraction
//!
//! String-keyed, string-valued, synchronous storage. The browser's
//! `localStorage`/`sessionStorage` implement it in the frontend; `MemoryStore`
//! backs tests and hosts without web storage.

use std::cell::RefCell;
use std::collections::BTreeMap;

/// Synchronous string key-value store
///
/// Writes take `&self`: implementations are single-threaded handles onto
/// shared storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        store
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_basic_ops() {
        let store = MemoryStore::new();
        assert!(store.get("theme").is_none());

        store.set("theme", "dark");
        assert_eq!(store.get("theme").as_deref(), Some("dark"));

        store.set("theme", "light");
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert_eq!(store.len(), 1);

        store.remove("theme");
        assert!(store.is_empty());
    }

    #[test]
    fn test_with_entries() {
        let store = MemoryStore::with_entries([("a", "1"), ("b", "2")]);
        assert_eq!(store.keys(), vec!["a".to_string(), "b".to_string()]);
    }
}
