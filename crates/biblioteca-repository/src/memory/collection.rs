//! Generic in-memory document collection.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::hash::Hash;

/// A single document collection guarded by one lock.
///
/// Each operation takes the lock exactly once, which gives the per-document
/// atomicity the catalog relies on: concurrent writes to the same ID are
/// serialized, last write wins. Iteration order is the map's natural order
/// and is not contractually sorted.
pub struct Collection<K, V> {
    documents: RwLock<HashMap<K, V>>,
}

impl<K, V> Collection<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the document stored under `key`, if any.
    pub fn get(&self, key: &K) -> Option<V> {
        self.documents.read().get(key).cloned()
    }

    /// Returns all documents matching `predicate`.
    pub fn filter(&self, predicate: impl Fn(&V) -> bool) -> Vec<V> {
        self.documents
            .read()
            .values()
            .filter(|doc| predicate(doc))
            .cloned()
            .collect()
    }

    /// Returns every document in the collection.
    pub fn all(&self) -> Vec<V> {
        self.documents.read().values().cloned().collect()
    }

    /// Inserts or replaces the document under `key`.
    pub fn insert(&self, key: K, value: V) {
        self.documents.write().insert(key, value);
    }

    /// Replaces the document under `key` only if it already exists.
    /// Returns the new value when the replacement happened.
    pub fn replace(&self, key: &K, value: V) -> Option<V> {
        let mut documents = self.documents.write();
        if documents.contains_key(key) {
            documents.insert(key.clone(), value.clone());
            Some(value)
        } else {
            None
        }
    }

    /// Removes the document under `key`, returning it if it existed.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.documents.write().remove(key)
    }

    /// Returns the number of documents.
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// Returns `true` when the collection holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

impl<K, V> Default for Collection<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let collection: Collection<u32, String> = Collection::new();
        collection.insert(1, "one".to_string());

        assert_eq!(collection.get(&1), Some("one".to_string()));
        assert_eq!(collection.get(&2), None);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_replace_requires_existing_key() {
        let collection: Collection<u32, String> = Collection::new();
        assert!(collection.replace(&1, "one".to_string()).is_none());

        collection.insert(1, "one".to_string());
        assert_eq!(collection.replace(&1, "uno".to_string()), Some("uno".to_string()));
        assert_eq!(collection.get(&1), Some("uno".to_string()));
    }

    #[test]
    fn test_remove() {
        let collection: Collection<u32, String> = Collection::new();
        collection.insert(1, "one".to_string());

        assert_eq!(collection.remove(&1), Some("one".to_string()));
        assert_eq!(collection.remove(&1), None);
        assert!(collection.is_empty());
    }

    #[test]
    fn test_filter() {
        let collection: Collection<u32, String> = Collection::new();
        collection.insert(1, "apple".to_string());
        collection.insert(2, "banana".to_string());
        collection.insert(3, "apricot".to_string());

        let matches = collection.filter(|v| v.starts_with("ap"));
        assert_eq!(matches.len(), 2);
    }
}
