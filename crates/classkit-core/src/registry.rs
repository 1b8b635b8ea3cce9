use crate::{error::ConfigError, model::entity::EntityModel, traits::EntityKind};
use std::collections::BTreeMap;

///
/// EntityRegistry
///
/// Definition-time resolution of entity models. Registering validates the
/// declaration once, up front, and guarantees entity paths are unique so
/// cache keys cannot collide across types.
///

#[derive(Debug, Default)]
pub struct EntityRegistry {
    models: BTreeMap<&'static str, &'static EntityModel>,
}

impl EntityRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            models: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, model: &'static EntityModel) -> Result<(), ConfigError> {
        model.validate()?;

        if self.models.contains_key(model.path) {
            return Err(ConfigError::DuplicatePath { path: model.path });
        }
        self.models.insert(model.path, model);

        Ok(())
    }

    /// Register the model bound to `E`, checking the binding is consistent.
    pub fn register_kind<E: EntityKind>(&mut self) -> Result<(), ConfigError> {
        if E::PATH != E::MODEL.path {
            return Err(ConfigError::PathMismatch {
                kind: E::PATH,
                model: E::MODEL.path,
            });
        }

        self.register(E::MODEL)
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&'static EntityModel> {
        self.models.get(path).copied()
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.models.contains_key(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static EntityModel> + '_ {
        self.models.values().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

///
/// TESTS
///
