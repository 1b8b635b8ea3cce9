use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, btree_map},
    ops::Index,
};

///
/// Record
///
/// Dict-proxy storage: attribute-style access (`attr` / `set_attr`) and
/// key/value access (`get` / `insert` / `record["key"]`) read and write the
/// same map. Also the field storage of entities that are not Slotted.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    entries: BTreeMap<String, Value>,
}

impl Record {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    // ------------------------------------------------------------------
    // Attribute view
    // ------------------------------------------------------------------

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Assign an attribute, returning the value it replaced.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(name.into(), value.into())
    }

    // ------------------------------------------------------------------
    // Key/value view
    // ------------------------------------------------------------------

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<&str> for Record {
    type Output = Value;

    fn index(&self, key: &str) -> &Self::Output {
        self.entries
            .get(key)
            .unwrap_or_else(|| panic!("record has no key '{key}'"))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        record.extend(iter);
        record
    }
}

impl<K, V> Extend<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_and_key_views_share_storage() {
        let mut person = Record::new();
        person.set_attr("name", "Alice");
        person.insert("age", 25);

        assert_eq!(person.attr("age"), Some(&Value::Int(25)));
        assert_eq!(person["name"], Value::from("Alice"));
        assert_eq!(person.keys().collect::<Vec<_>>(), vec!["age", "name"]);
    }

    #[test]
    fn set_attr_returns_replaced_value() {
        let mut record = Record::new();

        assert_eq!(record.set_attr("x", 1), None);
        assert_eq!(record.set_attr("x", 2), Some(Value::Int(1)));
        assert_eq!(record.get("x"), Some(&Value::Int(2)));
    }

    #[test]
    fn remove_and_contains() {
        let mut record: Record = [("a", 1), ("b", 2)].into_iter().collect();

        assert!(record.contains_key("a"));
        assert_eq!(record.remove("a"), Some(Value::Int(1)));
        assert!(!record.contains_key("a"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    #[should_panic(expected = "record has no key 'missing'")]
    fn index_panics_on_missing_key() {
        let record = Record::new();
        let _ = &record["missing"];
    }

    #[test]
    fn serializes_as_plain_map() {
        let record: Record = [("age", Value::Int(25))].into_iter().collect();
        let json = serde_json::to_string(&record).expect("serialize");

        assert_eq!(json, r#"{"age":{"Int":25}}"#);
    }
}
