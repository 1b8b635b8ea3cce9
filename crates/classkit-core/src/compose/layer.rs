use crate::{
    args::Args,
    entity::Entity,
    error::{EntityError, TypeViolation},
    model::entity::EntityModel,
    obs::sink::{self, MetricsEvent},
};

///
/// InitHook
///
/// User constructor body; runs after the capability layers, with the same
/// arguments, and writes through the entity's write guard like any layer.
///

pub type InitHook = fn(&Entity, &Args) -> Result<(), EntityError>;

///
/// InitLayer
///
/// One step of entity initialization. A layer performs its own concern and
/// then hands control to the rest of the chain through `next`; returning
/// without calling `next` ends initialization early.
///

pub trait InitLayer {
    /// Capability label, used in pipeline diagnostics.
    fn label(&self) -> &'static str;

    fn init(&self, entity: &Entity, args: &Args, next: Next<'_>) -> Result<(), EntityError>;
}

///
/// Next
/// The remainder of an initialization chain.
///

#[derive(Clone, Copy)]
pub struct Next<'a> {
    layers: &'a [&'static dyn InitLayer],
}

impl<'a> Next<'a> {
    pub(crate) const fn new(layers: &'a [&'static dyn InitLayer]) -> Self {
        Self { layers }
    }

    /// Run the next layer, or finish when the chain is exhausted.
    pub fn run(self, entity: &Entity, args: &Args) -> Result<(), EntityError> {
        match self.layers.split_first() {
            Some((layer, rest)) => layer.init(entity, args, Next::new(rest)),
            None => Ok(()),
        }
    }
}

///
/// TypedLayer
///
/// Checks each positional argument that has a declared constraint; the
/// shorter of the two lists wins. Stops at the first violation.
///

pub struct TypedLayer;

impl TypedLayer {
    /// Check `args` against the model's constraints without touching an entity.
    pub fn check(model: &EntityModel, args: &Args) -> Result<(), TypeViolation> {
        let types = model.types.unwrap_or(&[]);

        for (position, (kind, value)) in types.iter().zip(args.positional()).enumerate() {
            if !kind.accepts(value) {
                return Err(TypeViolation {
                    entity: model.name,
                    position,
                    value: value.clone(),
                    expected: *kind,
                    actual: value.tag(),
                });
            }
        }

        Ok(())
    }
}

impl InitLayer for TypedLayer {
    fn label(&self) -> &'static str {
        "Typed"
    }

    fn init(&self, entity: &Entity, args: &Args, next: Next<'_>) -> Result<(), EntityError> {
        if let Err(err) = Self::check(entity.model(), args) {
            sink::record(MetricsEvent::TypeViolation {
                entity_path: entity.path(),
            });

            return Err(err.into());
        }

        next.run(entity, args)
    }
}

///
/// SlottedLayer
///
/// Assigns positional arguments to slots left to right. Surplus arguments
/// are ignored and missing ones leave trailing slots unset.
///

pub struct SlottedLayer;

impl InitLayer for SlottedLayer {
    fn label(&self) -> &'static str {
        "Slotted"
    }

    fn init(&self, entity: &Entity, args: &Args, next: Next<'_>) -> Result<(), EntityError> {
        for (slot, value) in entity.model().slot_names().iter().zip(args.positional()) {
            entity.set(slot, value.clone())?;
        }

        next.run(entity, args)
    }
}

///
/// HookLayer
/// Runs the model's init hook, if any.
///

pub struct HookLayer;

impl InitLayer for HookLayer {
    fn label(&self) -> &'static str {
        "Init"
    }

    fn init(&self, entity: &Entity, args: &Args, next: Next<'_>) -> Result<(), EntityError> {
        if let Some(hook) = entity.model().init {
            hook(entity, args)?;
        }

        next.run(entity, args)
    }
}
