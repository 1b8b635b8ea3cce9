mod float;
mod tag;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

// re-exports
pub use float::Float64;
pub use tag::{ValueTag, canonical_tag};

///
/// Value
///
/// Dynamic field payload carried by entities, records and constructor
/// arguments.
///
/// Every variant is `Eq + Ord + Hash`; floats are finite-only, which is what
/// lets any value take part in a cache key.
///
/// Null        → an explicit "no value" payload, distinct from an unset slot.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Float(Float64),
    Int(i64),
    /// Ordered list of values; order is significant for equality and keys.
    List(Vec<Self>),
    Null,
    Text(String),
    Uint(u64),
}

impl Value {
    /// Build a float value, rejecting NaN and infinities.
    #[must_use]
    pub fn from_f64(v: f64) -> Option<Self> {
        Float64::try_new(v).map(Self::Float)
    }

    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        canonical_tag(self)
    }

    /// Runtime type label used in type-constraint diagnostics.
    #[must_use]
    pub const fn type_label(&self) -> &'static str {
        self.tag().label()
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Uint(_) | Self::Float(_))
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_uint(&self) -> Option<u64> {
        match self {
            Self::Uint(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(v.get()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

// Text renders bare so entity rendering reads `Person(name=Alice, age=25)`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blob(bytes) => {
                f.write_str("0x")?;
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
            Self::Bool(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            Self::Null => f.write_str("null"),
            Self::Text(s) => f.write_str(s),
            Self::Uint(v) => write!(f, "{v}"),
        }
    }
}

///
/// Conversions
///

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl From<Float64> for Value {
    fn from(v: Float64) -> Self {
        Self::Float(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Blob(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

macro_rules! impl_value_from_int {
    ( $variant:ident => $( $ty:ty ),* $(,)? ) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_value_from_int!(Int => i8, i16, i32, i64);
impl_value_from_int!(Uint => u8, u16, u32, u64);

impl TryFrom<f64> for Value {
    type Error = ();

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Self::from_f64(v).ok_or(())
    }
}
