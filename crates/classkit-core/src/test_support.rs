//! Shared entity models for core tests.

use crate::{
    args::Args,
    entity::Entity,
    error::EntityError,
    model::{
        entity::{Capabilities, EntityModel},
        field::FieldKind,
    },
    value::Value,
};

/// The fully composed reference entity: Slotted + Typed + Immutable + Cached.
pub static PERSON: EntityModel = EntityModel::new("tests::Person", "Person")
    .slotted(&["name", "age"])
    .typed(&[FieldKind::Text, FieldKind::Int])
    .immutable()
    .cached();

/// Slotted + Typed, not cached: equal arguments give distinct instances.
pub static ACCOUNT: EntityModel = EntityModel::new("tests::Account", "Account")
    .slotted(&["first", "last", "id", "balance"])
    .typed(&[FieldKind::Text, FieldKind::Text, FieldKind::Int, FieldKind::Int]);

/// Slotted only.
pub static POINT: EntityModel = EntityModel::new("tests::Point", "Point").slotted(&["x", "y"]);

/// Same shape as `POINT`, different type.
pub static VECTOR: EntityModel = EntityModel::new("tests::Vector", "Vector").slotted(&["x", "y"]);

/// Slotted + Typed + Cached, mutable.
pub static COUNTER: EntityModel = EntityModel::new("tests::Counter", "Counter")
    .slotted(&["label", "count"])
    .typed(&[FieldKind::Text, FieldKind::Int])
    .cached();

/// Immutable only; fields come from the init hook.
pub static FROZEN: EntityModel = EntityModel::new("tests::Frozen", "Frozen")
    .immutable()
    .init(assign_name_age);

/// Slotted + Immutable with an init hook that re-assigns the slots.
pub static REINIT: EntityModel = EntityModel::new("tests::Reinit", "Reinit")
    .slotted(&["name", "age"])
    .immutable()
    .init(assign_name_age);

/// Typed without Slotted; the init hook stores the checked arguments.
pub static TYPED_ONLY: EntityModel = EntityModel::new("tests::TypedOnly", "TypedOnly")
    .typed(&[FieldKind::Text, FieldKind::Int])
    .init(assign_name_age);

/// Declares Slotted but no slots.
pub static NO_SLOTS: EntityModel =
    EntityModel::new("tests::NoSlots", "NoSlots").with_capabilities(Capabilities::SLOTTED);

/// Declares Typed but no types.
pub static NO_TYPES: EntityModel = EntityModel::new("tests::NoTypes", "NoTypes")
    .slotted(&["a"])
    .with_capabilities(Capabilities::TYPED);

/// Writes the first two positional arguments to `name` and `age`.
pub fn assign_name_age(entity: &Entity, args: &Args) -> Result<(), EntityError> {
    if let Some(name) = args.get(0) {
        entity.set("name", name.clone())?;
    }
    if let Some(age) = args.get(1) {
        entity.set("age", age.clone())?;
    }

    Ok(())
}

#[must_use]
pub fn float(x: f64) -> Value {
    Value::from_f64(x).expect("finite f64")
}
