use crate::model::entity::EntityModel;

// ============================================================================
// FOUNDATIONAL KINDS
// ============================================================================
//
// These traits bind a Rust marker type to its static entity declaration so
// call sites can construct by type instead of passing models around.
//

///
/// Path
/// Fully-qualified entity path.
///

pub trait Path {
    const PATH: &'static str;
}

///
/// EntityKind
///
/// A Rust marker type that opts into the capabilities declared by `MODEL`.
/// `MODEL.path` must equal `PATH`.
///

pub trait EntityKind: Path + 'static {
    const MODEL: &'static EntityModel;
}
