use crate::{
    model::field::FieldKind,
    value::{Value, ValueTag},
};
use derive_more::Display;
use thiserror::Error as ThisError;

///
/// EntityError
///
/// Every failure the runtime can report. All are synchronous and abort the
/// single construction or write in progress; previously built instances are
/// never touched.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum EntityError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Type(#[from] TypeViolation),

    #[error(transparent)]
    Immutable(#[from] ImmutableViolation),

    #[error("{entity} has no field '{field}'")]
    UnknownField {
        entity: &'static str,
        field: String,
    },
}

impl EntityError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Config(_) => ErrorClass::Config,
            Self::Type(_) => ErrorClass::TypeConstraint,
            Self::Immutable(_) => ErrorClass::Immutability,
            Self::UnknownField { .. } => ErrorClass::Unsupported,
        }
    }

    #[must_use]
    pub const fn origin(&self) -> ErrorOrigin {
        match self {
            Self::Config(ConfigError::DuplicatePath { .. } | ConfigError::PathMismatch { .. }) => {
                ErrorOrigin::Registry
            }
            Self::Config(_) | Self::Type(_) => ErrorOrigin::Construct,
            Self::Immutable(_) | Self::UnknownField { .. } => ErrorOrigin::Write,
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin(), self.class(), self)
    }

    pub(crate) fn unknown_field(entity: &'static str, field: impl Into<String>) -> Self {
        Self::UnknownField {
            entity,
            field: field.into(),
        }
    }
}

///
/// ConfigError
///
/// An entity model is missing a declaration its capabilities require, or
/// declares something twice.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("{entity} does not define slots")]
    MissingSlots { entity: &'static str },

    #[error("{entity} does not define types")]
    MissingTypes { entity: &'static str },

    #[error("{entity} declares slot '{slot}' more than once")]
    DuplicateSlot {
        entity: &'static str,
        slot: &'static str,
    },

    #[error("entity path '{path}' is already registered")]
    DuplicatePath { path: &'static str },

    #[error("entity kind '{kind}' is bound to a model with path '{model}'")]
    PathMismatch {
        kind: &'static str,
        model: &'static str,
    },
}

///
/// TypeViolation
///
/// A constructor argument failed its declared type constraint.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{value} should be of type {expected}. Got type {}", .actual.label())]
pub struct TypeViolation {
    pub entity: &'static str,
    /// Zero-based argument position.
    pub position: usize,
    pub value: Value,
    pub expected: FieldKind,
    pub actual: ValueTag,
}

///
/// ImmutableViolation
///
/// A write tried to replace an already-set field with an unequal value.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{entity} is immutable: field '{field}' holds {current}, refusing {attempted}")]
pub struct ImmutableViolation {
    pub entity: &'static str,
    pub field: String,
    pub current: Value,
    pub attempted: Value,
}

///
/// ErrorClass
/// Error taxonomy for callers that branch on category.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorClass {
    #[display("config")]
    Config,
    #[display("type_constraint")]
    TypeConstraint,
    #[display("immutability")]
    Immutability,
    #[display("unsupported")]
    Unsupported,
}

///
/// ErrorOrigin
/// Which operation surfaced the error.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorOrigin {
    #[display("construct")]
    Construct,
    #[display("registry")]
    Registry,
    #[display("write")]
    Write,
}

///
/// TESTS
///
