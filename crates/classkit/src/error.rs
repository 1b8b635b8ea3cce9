use classkit_core::error::{
    ConfigError, EntityError, ErrorClass as CoreErrorClass, ErrorOrigin as CoreErrorOrigin,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<EntityError> for Error {
    fn from(err: EntityError) -> Self {
        let kind = match &err {
            EntityError::Config(config) => ErrorKind::Config(config.into()),
            EntityError::Type(_) => ErrorKind::TypeConstraint,
            EntityError::Immutable(_) => ErrorKind::Immutability,
            EntityError::UnknownField { .. } => ErrorKind::UnknownField,
        };

        Self::new(kind, err.origin().into(), err.to_string())
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        EntityError::from(err).into()
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// The entity type's declaration is incomplete or conflicting.
    Config(ConfigErrorKind),

    /// A constructor argument does not satisfy its declared type.
    TypeConstraint,

    /// A write attempted to change an already-set field.
    Immutability,

    /// A write named a field the entity type does not declare.
    UnknownField,
}

impl ErrorKind {
    /// Coarse class, matching the core taxonomy.
    #[must_use]
    pub const fn class(&self) -> CoreErrorClass {
        match self {
            Self::Config(_) => CoreErrorClass::Config,
            Self::TypeConstraint => CoreErrorClass::TypeConstraint,
            Self::Immutability => CoreErrorClass::Immutability,
            Self::UnknownField => CoreErrorClass::Unsupported,
        }
    }
}

///
/// ConfigErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ConfigErrorKind {
    MissingSlots,
    MissingTypes,
    DuplicateSlot,
    DuplicatePath,
    PathMismatch,
}

impl From<&ConfigError> for ConfigErrorKind {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingSlots { .. } => Self::MissingSlots,
            ConfigError::MissingTypes { .. } => Self::MissingTypes,
            ConfigError::DuplicateSlot { .. } => Self::DuplicateSlot,
            ConfigError::DuplicatePath { .. } => Self::DuplicatePath,
            ConfigError::PathMismatch { .. } => Self::PathMismatch,
        }
    }
}

///
/// ErrorOrigin
/// Public origin taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Construct,
    Registry,
    Write,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Construct => Self::Construct,
            CoreErrorOrigin::Registry => Self::Registry,
            CoreErrorOrigin::Write => Self::Write,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use classkit_core::error::ImmutableViolation;
    use classkit_core::value::Value;

    #[test]
    fn entity_error_maps_kind_origin_and_message() {
        let err: Error = EntityError::from(ImmutableViolation {
            entity: "Person",
            field: "age".to_string(),
            current: Value::Int(25),
            attempted: Value::Int(26),
        })
        .into();

        assert_eq!(err.kind, ErrorKind::Immutability);
        assert_eq!(err.origin, ErrorOrigin::Write);
        assert_eq!(
            err.message,
            "Person is immutable: field 'age' holds 25, refusing 26"
        );
        assert_eq!(err.kind.class(), CoreErrorClass::Immutability);
    }

    #[test]
    fn config_errors_keep_their_detail() {
        let err: Error = ConfigError::DuplicatePath {
            path: "app::Person",
        }
        .into();

        assert_eq!(err.kind, ErrorKind::Config(ConfigErrorKind::DuplicatePath));
        assert_eq!(err.origin, ErrorOrigin::Registry);
    }

    #[test]
    fn error_round_trips_through_json() {
        let err = Error::new(ErrorKind::UnknownField, ErrorOrigin::Write, "Point has no field 'z'");
        let json = serde_json::to_string(&err).expect("serialize");
        let back: Error = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back, err);
        assert_eq!(err.origin.to_string(), "Write");
    }
}
