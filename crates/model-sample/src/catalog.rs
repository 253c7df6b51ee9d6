//! # Model Catalog
//!
//! Defines the sample models in dependency order through a single
//! [`ModelFactory`], so `Person` can refer to `Address` by name.

use model_framework::{
    Attributes, Identity, Instance, ModelDefinition, ModelError, ModelFactory, Value, ID_KEY,
};
use tracing::{debug, info};

use crate::model::{address_spec, person_spec, ADDRESS, PERSON};

/// Every model of the sample domain.
#[derive(Debug)]
pub struct ModelCatalog {
    pub address: ModelDefinition,
    pub person: ModelDefinition,
    factory: ModelFactory,
}

impl ModelCatalog {
    pub fn new() -> Result<Self, ModelError> {
        let mut factory = ModelFactory::new();
        let address = factory.create(address_spec())?;
        let person = factory.create(person_spec())?;
        info!(models = ?[ADDRESS, PERSON], "Catalog ready");
        Ok(Self {
            address,
            person,
            factory,
        })
    }

    /// Looks up a model by its registered name.
    pub fn get(&self, name: &str) -> Option<&ModelDefinition> {
        self.factory.get(name)
    }

    /// Rebuilds a person from a stored JSON record.
    ///
    /// The record's `id`, when present, becomes the entity identity instead of an
    /// attribute. It must be text or an `i64`; anything else is a shape error. No
    /// validation runs: stored records are trusted.
    pub fn rehydrate_person(&self, record: serde_json::Value) -> Result<Instance, ModelError> {
        let mut attrs = Attributes::from_json(record)?;
        let id = attrs.remove(ID_KEY).map(identity_from).transpose()?;
        debug!(?id, "Rehydrate person");

        let mut person = self.person.reconstitute(attrs)?;
        if let (Some(id), Some(entity)) = (id, person.as_entity_mut()) {
            entity.set_id(id);
        }
        Ok(person)
    }
}

fn identity_from(value: Value) -> Result<Identity, ModelError> {
    match value {
        Value::Text(text) => Ok(Identity::Text(text)),
        Value::Number(n) => n
            .as_i64()
            .map(Identity::Number)
            .ok_or_else(|| shape_of_id("unsupported number")),
        other => Err(shape_of_id(other.kind())),
    }
}

fn shape_of_id(found: &'static str) -> ModelError {
    ModelError::Shape {
        context: format!("{ID_KEY} of {PERSON}"),
        found,
    }
}
