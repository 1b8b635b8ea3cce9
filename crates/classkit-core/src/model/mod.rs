//! Static entity declarations.
//!
//! Types here describe *what an entity type is*: its slots, its per-field
//! type constraints and the capabilities it composes. They are const-built
//! and resolved once, either by the registry or on first construction.
pub mod entity;
pub mod field;
