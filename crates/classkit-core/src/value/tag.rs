use crate::value::Value;

///
/// ValueTag
///
/// Stable value-variant tag used by ordering and diagnostics.
///
/// IMPORTANT:
/// Tag values are part of stable behavior; cross-variant ordering of cache
/// keys depends on them.
///
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[remain::sorted]
pub enum ValueTag {
    Blob = 1,
    Bool = 2,
    Float = 3,
    Int = 4,
    List = 5,
    Null = 6,
    Text = 7,
    Uint = 8,
}

impl ValueTag {
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blob => "Blob",
            Self::Bool => "Bool",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::List => "List",
            Self::Null => "Null",
            Self::Text => "Text",
            Self::Uint => "Uint",
        }
    }
}

/// Stable variant tag for a value.
#[must_use]
pub const fn canonical_tag(value: &Value) -> ValueTag {
    match value {
        Value::Blob(_) => ValueTag::Blob,
        Value::Bool(_) => ValueTag::Bool,
        Value::Float(_) => ValueTag::Float,
        Value::Int(_) => ValueTag::Int,
        Value::List(_) => ValueTag::List,
        Value::Null => ValueTag::Null,
        Value::Text(_) => ValueTag::Text,
        Value::Uint(_) => ValueTag::Uint,
    }
}
