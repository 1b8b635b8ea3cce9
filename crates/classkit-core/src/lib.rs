//! Core runtime for classkit: entity models, dynamic values, the
//! construction pipeline, the instance cache and observability.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod args;
pub mod cache;
pub mod compose;
pub mod entity;
pub mod error;
pub mod model;
pub mod obs;
pub mod record;
pub mod registry;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks or layer internals are re-exported here.
///

pub mod prelude {
    pub use crate::{
        args,
        args::Args,
        compose::Composer,
        entity::{Entity, WriteOutcome},
        model::{
            entity::{Capabilities, EntityModel},
            field::FieldKind,
        },
        record::Record,
        registry::EntityRegistry,
        traits::{EntityKind, Path},
        value::{Float64, Value},
    };
}
