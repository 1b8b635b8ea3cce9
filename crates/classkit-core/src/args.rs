use crate::value::Value;
use std::collections::BTreeMap;

///
/// Args
///
/// Constructor arguments: ordered positional values plus keyword values.
///
/// Keyword arguments behave as a set of name/value pairs: names are unique
/// (a repeated name replaces the earlier value) and their order is not
/// significant.
///

#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Args {
    positional: Vec<Value>,
    keyword: BTreeMap<String, Value>,
}

impl Args {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positional: Vec::new(),
            keyword: BTreeMap::new(),
        }
    }

    /// Append one positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set one keyword argument.
    #[must_use]
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    #[must_use]
    pub const fn keyword(&self) -> &BTreeMap<String, Value> {
        &self.keyword
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    #[must_use]
    pub fn kw(&self, name: &str) -> Option<&Value> {
        self.keyword.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positional.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }
}

impl From<Vec<Value>> for Args {
    fn from(positional: Vec<Value>) -> Self {
        Self {
            positional,
            keyword: BTreeMap::new(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Args
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |args, (name, value)| args.kwarg(name, value))
    }
}

/// Build constructor arguments: `args!["Alice", 25]` or
/// `args!["Alice"; nickname = "Al"]`.
#[macro_export]
macro_rules! args {
    ( $( $arg:expr ),* ; $( $key:ident = $kw:expr ),* $(,)? ) => {
        $crate::args::Args::new()
            $( .arg($arg) )*
            $( .kwarg(stringify!($key), $kw) )*
    };
    ( $( $arg:expr ),* $(,)? ) => {
        $crate::args::Args::new() $( .arg($arg) )*
    };
}

///
/// TESTS
///
