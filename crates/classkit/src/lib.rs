//! ## Crate layout
//! - `core`: entity models, values, construction, the instance cache and
//!   observability.
//! - `error`: the public error type callers match on.
//!
//! The `prelude` module is the surface most callers need: declare an
//! `EntityModel`, bind it to a type with `EntityKind`, and construct
//! through a `Composer`.

pub use classkit_core as core;

pub mod error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// re-exports
pub use classkit_core::args;
pub use error::Error;

///
/// Prelude
/// Domain vocabulary for declaring and constructing entities.
///

pub mod prelude {
    pub use crate::{
        core::{
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
        },
        error::{Error, ErrorKind},
    };
    pub use classkit_core::args;
}
