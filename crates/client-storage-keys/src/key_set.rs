//! Helpers on [`KeySet`], the "valid storage key" constraint in value form.
//!
//! The flags themselves are generated next to [`StorageKey`] so the bit for
//! each key comes from the same declaration table.

use std::fmt;

use crate::{KeySet, StorageKey, StorageKeyError, StorageKeyResult};

const _: () = assert!(StorageKey::ALL.len() <= u32::BITS as usize);

impl KeySet {
    pub const fn of(key: StorageKey) -> Self {
        key.as_set()
    }

    #[must_use]
    pub const fn with(self, key: StorageKey) -> Self {
        self.union(key.as_set())
    }

    pub const fn contains_key(&self, key: StorageKey) -> bool {
        self.contains(key.as_set())
    }

    /// Check a raw string against the set. Strings that are not registry
    /// literals are never members.
    pub fn contains_str(&self, literal: &str) -> bool {
        literal
            .parse::<StorageKey>()
            .is_ok_and(|key| self.contains_key(key))
    }

    /// Number of keys in the set.
    pub const fn len(&self) -> usize {
        self.bits().count_ones() as usize
    }

    /// Members in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = StorageKey> + '_ {
        StorageKey::ALL
            .iter()
            .copied()
            .filter(|key| self.contains_key(*key))
    }

    /// Build a set from raw literals. Fails on the first string that is not
    /// a registered key.
    pub fn from_literals<'a, I>(literals: I) -> StorageKeyResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        literals
            .into_iter()
            .map(|literal| literal.parse::<StorageKey>())
            .collect::<Result<Self, StorageKeyError>>()
    }
}

impl From<StorageKey> for KeySet {
    fn from(key: StorageKey) -> Self {
        key.as_set()
    }
}

impl FromIterator<StorageKey> for KeySet {
    fn from_iter<I: IntoIterator<Item = StorageKey>>(iter: I) -> Self {
        let mut set = KeySet::empty();
        for key in iter {
            set |= key.as_set();
        }
        set
    }
}

impl Extend<StorageKey> for KeySet {
    fn extend<I: IntoIterator<Item = StorageKey>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key.as_set());
        }
    }
}

impl fmt::Debug for KeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys().map(StorageKey::as_str)).finish()
    }
}
