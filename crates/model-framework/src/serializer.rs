//! # Serializer
//!
//! Projects instances into plain `serde_json` data. Every call builds a fresh map
//! from the current attributes; nothing is cached and nothing is shared with the
//! instance.
//!
//! - Nested instances are projected recursively.
//! - Timestamps become RFC 3339 strings in UTC with millisecond precision.
//! - An entity's identity is appended under `id`, last, only when set.

use chrono::SecondsFormat;
use serde::{Serialize, Serializer as SerdeSerializer};
use serde_json::{Map, Value as Json};

use crate::instance::{EntityInstance, Instance, ValueObjectInstance};
use crate::model::Serializable;
use crate::value::{Attributes, Identity, Value};

/// Reserved key for entity identity in projected data.
pub const ID_KEY: &str = "id";

pub struct Serializer;

impl Serializer {
    pub fn project(attributes: &Attributes, id: Option<&Identity>) -> Map<String, Json> {
        let mut data: Map<String, Json> = attributes
            .iter()
            .map(|(key, value)| (key.to_owned(), Self::project_value(value)))
            .collect();
        if let Some(id) = id {
            data.insert(ID_KEY.to_owned(), id.to_json());
        }
        data
    }

    pub fn project_value(value: &Value) -> Json {
        match value {
            Value::Null => Json::Null,
            Value::Bool(flag) => Json::Bool(*flag),
            Value::Number(n) => Json::Number(n.clone()),
            Value::Text(text) => Json::String(text.clone()),
            Value::Timestamp(ts) => Json::String(ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Value::List(items) => Json::Array(items.iter().map(Self::project_value).collect()),
            Value::Map(attributes) => Json::Object(Self::project(attributes, None)),
            Value::Instance(instance) => Json::Object(instance.to_data()),
        }
    }
}

impl Serializable for EntityInstance {
    fn to_data(&self) -> Map<String, Json> {
        Serializer::project(&self.attributes, self.id.as_ref())
    }
}

impl Serializable for ValueObjectInstance {
    fn to_data(&self) -> Map<String, Json> {
        Serializer::project(&self.attributes, None)
    }
}

impl Serializable for Instance {
    fn to_data(&self) -> Map<String, Json> {
        match self {
            Instance::Entity(entity) => entity.to_data(),
            Instance::ValueObject(value_object) => value_object.to_data(),
        }
    }
}

macro_rules! serialize_as_data {
    ($($ty:ty),*) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: SerdeSerializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    self.to_data().serialize(serializer)
                }
            }
        )*
    };
}

serialize_as_data!(EntityInstance, ValueObjectInstance, Instance);
