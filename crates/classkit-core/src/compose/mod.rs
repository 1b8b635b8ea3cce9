//! Entity construction.
//!
//! Order for a fully composed entity type:
//! 1. validate the model declaration
//! 2. Cached: build the cache key and return a live instance on a hit,
//!    skipping everything below
//! 3. allocate a fresh instance
//! 4. run the init chain: Typed → Slotted → init hook
//! 5. Cached: register the instance, only after 4 succeeded
//!
//! Immutable is not a step: it is the write guard every assignment in 4
//! goes through.

mod layer;


use crate::{
    args::Args,
    cache::{CacheKey, InstanceCache},
    entity::Entity,
    error::EntityError,
    model::entity::EntityModel,
    obs::sink::{self, MetricsEvent},
    traits::EntityKind,
};

// re-exports
pub use layer::{HookLayer, InitHook, InitLayer, Next, SlottedLayer, TypedLayer};

static TYPED: TypedLayer = TypedLayer;
static SLOTTED: SlottedLayer = SlottedLayer;
static HOOK: HookLayer = HookLayer;

///
/// Pipeline
/// The init chain resolved from one model's capabilities.
///

pub struct Pipeline {
    layers: Vec<&'static dyn InitLayer>,
}

impl Pipeline {
    #[must_use]
    pub fn for_model(model: &EntityModel) -> Self {
        let mut layers: Vec<&'static dyn InitLayer> = Vec::with_capacity(3);

        if model.capabilities.typed {
            layers.push(&TYPED);
        }
        if model.capabilities.slotted {
            layers.push(&SLOTTED);
        }
        if model.init.is_some() {
            layers.push(&HOOK);
        }

        Self { layers }
    }

    /// Layer labels in execution order.
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        self.layers.iter().map(|layer| layer.label()).collect()
    }

    pub fn run(&self, entity: &Entity, args: &Args) -> Result<(), EntityError> {
        Next::new(&self.layers).run(entity, args)
    }
}

///
/// Composer
///
/// Constructs entities. Owns the instance cache used by Cached entity
/// types; every composer has its own, so caches never leak between
/// unrelated composers (or tests).
///

#[derive(Default)]
pub struct Composer {
    cache: InstanceCache,
}

impl Composer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_cache(cache: InstanceCache) -> Self {
        Self { cache }
    }

    #[must_use]
    pub const fn cache(&self) -> &InstanceCache {
        &self.cache
    }

    /// Construct an instance of `model`.
    pub fn construct(
        &self,
        model: &'static EntityModel,
        args: Args,
    ) -> Result<Entity, EntityError> {
        sink::record(MetricsEvent::Construct {
            entity_path: model.path,
        });

        if let Err(err) = model.validate() {
            sink::record(MetricsEvent::ConfigRejected {
                entity_path: model.path,
            });

            return Err(err.into());
        }

        if !model.capabilities.cached {
            return Self::build(model, &args);
        }

        let key = CacheKey::new(model.path, args);
        if let Some(hit) = self.cache.get(&key) {
            sink::record(MetricsEvent::CacheHit {
                entity_path: model.path,
            });

            return Ok(hit);
        }

        sink::record(MetricsEvent::CacheMiss {
            entity_path: model.path,
        });

        let entity = Self::build(model, key.args())?;
        self.cache.insert(key, entity.clone());

        Ok(entity)
    }

    /// Construct an instance of the entity type `E`.
    pub fn construct_kind<E: EntityKind>(&self, args: Args) -> Result<Entity, EntityError> {
        self.construct(E::MODEL, args)
    }

    fn build(model: &'static EntityModel, args: &Args) -> Result<Entity, EntityError> {
        let entity = Entity::allocate(model);
        Pipeline::for_model(model).run(&entity, args)?;

        Ok(entity)
    }
}
