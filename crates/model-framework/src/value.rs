//! # Attribute Values
//!
//! Raw data handed to [`ModelDefinition::create`](crate::ModelDefinition::create) and
//! [`ModelDefinition::reconstitute`](crate::ModelDefinition::reconstitute), plus the
//! [`Identity`] carried by entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ModelError;
use crate::instance::Instance;

/// A raw attribute value.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    Timestamp(DateTime<Utc>),
    List(Vec<Value>),
    /// Nested attribute data, e.g. the fields of a value object before construction.
    Map(Attributes),
    /// An already constructed nested instance.
    Instance(Instance),
}

impl Value {
    /// Short name of the value's shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Timestamp(_) => "timestamp",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Instance(_) => "instance",
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

macro_rules! number_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n.into())
                }
            }
        )*
    };
}

number_from!(i32, i64, u32, u64);

impl From<f64> for Value {
    /// Non-finite numbers have no JSON representation and become `Null`.
    fn from(n: f64) -> Self {
        serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Value::Timestamp(ts)
    }
}

impl From<Attributes> for Value {
    fn from(attributes: Attributes) -> Self {
        Value::Map(attributes)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Value::Instance(instance)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(flag) => Value::Bool(flag),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(text) => Value::Text(text),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(map.into_iter().collect()),
        }
    }
}

/// Insertion-ordered mapping from field name to [`Value`].
///
/// Keys that are not part of a model's field specification are kept as-is.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    entries: Vec<(String, Value)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a value, keeping the key's original position on replace.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Value)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Converts a stored JSON object into attributes, e.g. before calling
    /// [`reconstitute`](crate::ModelDefinition::reconstitute).
    pub fn from_json(json: serde_json::Value) -> Result<Self, ModelError> {
        match json {
            serde_json::Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(ModelError::Shape {
                context: "attributes".into(),
                found: json_kind(&other),
            }),
        }
    }
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "text",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "map",
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

impl IntoIterator for Attributes {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Builds [`Attributes`] from `key => value` pairs.
///
/// ```rust
/// use model_framework::attrs;
///
/// let person = attrs! {
///     "firstName" => "sam",
///     "homeAddress" => attrs! { "country" => "US" },
/// };
/// assert!(person.contains_key("homeAddress"));
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attributes::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut attributes = $crate::Attributes::new();
        $( attributes.insert($key, $value); )+
        attributes
    }};
}

/// Identity of an entity. Either text or a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identity {
    Number(i64),
    Text(String),
}

impl Identity {
    pub(crate) fn to_json(&self) -> serde_json::Value {
        match self {
            Identity::Number(n) => serde_json::Value::from(*n),
            Identity::Text(text) => serde_json::Value::String(text.clone()),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Number(n) => write!(f, "{n}"),
            Identity::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for Identity {
    fn from(id: &str) -> Self {
        Identity::Text(id.to_owned())
    }
}

impl From<String> for Identity {
    fn from(id: String) -> Self {
        Identity::Text(id)
    }
}

impl From<i64> for Identity {
    fn from(id: i64) -> Self {
        Identity::Number(id)
    }
}

impl From<i32> for Identity {
    fn from(id: i32) -> Self {
        Identity::Number(id.into())
    }
}

impl From<u32> for Identity {
    fn from(id: u32) -> Self {
        Identity::Number(id.into())
    }
}

/// Numeric identities are `i64`; larger ids must be stored as text.
impl TryFrom<u64> for Identity {
    type Error = std::num::TryFromIntError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        i64::try_from(id).map(Identity::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identity_from_u64_is_bounded_by_i64() {
        assert_eq!(Identity::try_from(42u64), Ok(Identity::Number(42)));
        assert!(Identity::try_from(u64::MAX).is_err());
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut attributes = attrs! { "a" => 1, "b" => 2 };
        let previous = attributes.insert("a", "one");
        assert!(matches!(previous, Some(Value::Number(_))));
        assert_eq!(attributes.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(matches!(attributes.get("a"), Some(Value::Text(t)) if t == "one"));
    }

    #[test]
    fn from_json_keeps_object_order_and_nesting() {
        let attributes = Attributes::from_json(json!({
            "zeta": 1,
            "alpha": { "country": "US" },
        }))
        .unwrap();
        assert_eq!(attributes.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        assert!(matches!(attributes.get("alpha"), Some(Value::Map(m)) if m.contains_key("country")));
    }

    #[test]
    fn from_json_rejects_non_objects() {
        let err = Attributes::from_json(json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(err.name(), "Shape Error");
        assert_eq!(
            err.to_string(),
            "Expected attribute data for attributes, found list"
        );
    }

    #[test]
    fn non_finite_numbers_become_null() {
        assert!(matches!(Value::from(f64::NAN), Value::Null));
    }

    #[test]
    fn identity_serializes_untagged() {
        assert_eq!(serde_json::to_value(Identity::from(1234)).unwrap(), json!(1234));
        assert_eq!(
            serde_json::from_value::<Identity>(json!("1234")).unwrap(),
            Identity::from("1234")
        );
    }
}
