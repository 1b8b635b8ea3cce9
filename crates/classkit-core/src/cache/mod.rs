//! Identity cache for Cached entity types.
//!
//! Keys are `(entity path, positional args, keyword set)`. Values must be
//! keyable, which every `Value` is: floats are finite-only so `Eq`, `Ord` and
//! `Hash` hold for the whole enum.
//!
//! The cache is unbounded. Entries live as long as the owning cache; there
//! is no expiry, only an explicit `clear`.

use crate::{args::Args, entity::Entity};
use std::{cell::RefCell, collections::HashMap};

///
/// CacheKey
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CacheKey {
    entity_path: &'static str,
    args: Args,
}

impl CacheKey {
    #[must_use]
    pub const fn new(entity_path: &'static str, args: Args) -> Self {
        Self { entity_path, args }
    }

    #[must_use]
    pub const fn entity_path(&self) -> &'static str {
        self.entity_path
    }

    #[must_use]
    pub const fn args(&self) -> &Args {
        &self.args
    }
}

///
/// InstanceCache
///
/// Single-threaded check-or-insert store; `Entity` handles are `!Send`, so
/// a cache cannot be shared across threads.
///

#[derive(Default)]
pub struct InstanceCache {
    entries: RefCell<HashMap<CacheKey, Entity>>,
}

impl InstanceCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Live instance registered under `key`.
    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<Entity> {
        self.entries.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Register `entity` under `key`, returning any instance it displaced.
    pub fn insert(&self, key: CacheKey, entity: Entity) -> Option<Entity> {
        self.entries.borrow_mut().insert(key, entity)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Number of live entries for one entity type.
    #[must_use]
    pub fn len_for(&self, entity_path: &str) -> usize {
        self.entries
            .borrow()
            .keys()
            .filter(|key| key.entity_path == entity_path)
            .count()
    }

    /// Drop every entry; handles held elsewhere stay valid.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

///
/// TESTS
///
