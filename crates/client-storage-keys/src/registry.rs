//! Process-wide key registry.

use crate::{KeyCategory, KeySet, StorageKey, StorageKeyError, StorageKeyResult};

/// The registry every caller shares. Built at compile time and never
/// mutated.
pub static REGISTRY: KeyRegistry = KeyRegistry::new();

/// Get the shared registry.
pub fn registry() -> &'static KeyRegistry {
    &REGISTRY
}

/// Read-only mapping from logical names to storage key literals.
#[derive(Debug)]
pub struct KeyRegistry {
    keys: &'static [StorageKey],
}

impl KeyRegistry {
    const fn new() -> Self {
        Self {
            keys: StorageKey::ALL,
        }
    }

    /// Literal for a logical name, e.g. `USER_EMAIL` -> `userEmail`.
    pub fn get(&self, name: &str) -> Option<&'static str> {
        StorageKey::from_name(name).map(StorageKey::as_str)
    }

    /// Resolve a logical name to its key.
    pub fn lookup(&self, name: &str) -> StorageKeyResult<StorageKey> {
        StorageKey::from_name(name).ok_or_else(|| StorageKeyError::UnknownName(name.to_string()))
    }

    /// `(logical name, literal)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.keys.iter().map(|key| (key.name(), key.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = StorageKey> {
        self.keys.iter().copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.keys.iter().map(|key| key.name())
    }

    pub fn values(&self) -> impl Iterator<Item = &'static str> {
        self.keys.iter().map(|key| key.as_str())
    }

    pub fn in_category(&self, category: KeyCategory) -> impl Iterator<Item = StorageKey> {
        self.keys
            .iter()
            .copied()
            .filter(move |key| key.category() == category)
    }

    /// Whether `literal` is a registered storage key.
    pub fn contains(&self, literal: &str) -> bool {
        self.values().any(|value| value == literal)
    }

    /// Accept a raw string only if it is a registered storage key.
    pub fn validate(&self, literal: &str) -> StorageKeyResult<StorageKey> {
        match literal.parse::<StorageKey>() {
            Ok(key) => Ok(key),
            Err(err) => {
                tracing::debug!(key = %literal, "Rejected unregistered storage key");
                Err(err)
            }
        }
    }

    /// The set of every registered key.
    pub fn key_set(&self) -> KeySet {
        self.keys().collect()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
