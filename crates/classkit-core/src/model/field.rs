use crate::value::Value;
use std::fmt;

///
/// FieldKind
///
/// Runtime type constraint for one declared field.
/// Checks are structural over the `Value` variant; there is no implicit
/// widening between numeric variants and `Bool` is never a number.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldKind {
    /// Accepts every value, including `Null`.
    Any,
    Blob,
    Bool,
    Float,
    Int,
    /// Any of `Int`, `Uint` or `Float`.
    Number,
    Text,
    Uint,

    // Wrappers
    List(&'static Self),
    /// `Null` or the inner kind.
    Optional(&'static Self),
}

impl FieldKind {
    /// Whether `value` satisfies this constraint.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Any, _)
            | (Self::Blob, Value::Blob(_))
            | (Self::Bool, Value::Bool(_))
            | (Self::Float, Value::Float(_))
            | (Self::Int, Value::Int(_))
            | (Self::Text, Value::Text(_))
            | (Self::Uint, Value::Uint(_))
            | (Self::Optional(_), Value::Null) => true,
            (Self::Number, v) => v.is_numeric(),
            (Self::List(inner), Value::List(items)) => items.iter().all(|item| inner.accepts(item)),
            (Self::Optional(inner), v) => inner.accepts(v),
            _ => false,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("Any"),
            Self::Blob => f.write_str("Blob"),
            Self::Bool => f.write_str("Bool"),
            Self::Float => f.write_str("Float"),
            Self::Int => f.write_str("Int"),
            Self::Number => f.write_str("Number"),
            Self::Text => f.write_str("Text"),
            Self::Uint => f.write_str("Uint"),
            Self::List(inner) => write!(f, "List<{inner}>"),
            Self::Optional(inner) => write!(f, "Optional<{inner}>"),
        }
    }
}

///
/// TESTS
///
