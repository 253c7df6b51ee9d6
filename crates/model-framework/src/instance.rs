//! # Instances
//!
//! The two runtime shapes a model produces. Both keep their attributes private:
//! the only way to read them is the [`Serializable`](crate::Serializable) projection.
//! Only [`EntityInstance`] has an identity, and it is never stored among the
//! attributes.

use std::fmt;
use std::sync::Arc;

use crate::schema::ModelSchema;
use crate::value::{Attributes, Identity};

/// An instance distinguished by identity.
#[derive(Clone)]
pub struct EntityInstance {
    pub(crate) schema: Arc<ModelSchema>,
    pub(crate) attributes: Attributes,
    pub(crate) id: Option<Identity>,
}

impl EntityInstance {
    /// Current identity, `None` until [`set_id`](Self::set_id) is called.
    pub fn id(&self) -> Option<&Identity> {
        self.id.as_ref()
    }

    /// Replaces the identity. Uniqueness is not checked.
    ///
    /// Numbers are stored as `i64`; use `Identity::try_from` for `u64` ids.
    pub fn set_id(&mut self, id: impl Into<Identity>) {
        self.id = Some(id.into());
    }

    pub fn model_name(&self) -> &str {
        &self.schema.name
    }
}

impl fmt::Debug for EntityInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityInstance")
            .field("model", &self.schema.name)
            .field("id", &self.id)
            .field("attributes", &self.attributes)
            .finish()
    }
}

/// An instance distinguished only by its attributes. Has no identity.
#[derive(Clone)]
pub struct ValueObjectInstance {
    pub(crate) schema: Arc<ModelSchema>,
    pub(crate) attributes: Attributes,
}

impl ValueObjectInstance {
    pub fn model_name(&self) -> &str {
        &self.schema.name
    }
}

impl fmt::Debug for ValueObjectInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueObjectInstance")
            .field("model", &self.schema.name)
            .field("attributes", &self.attributes)
            .finish()
    }
}

/// Result of building a model.
#[derive(Debug, Clone)]
pub enum Instance {
    Entity(EntityInstance),
    ValueObject(ValueObjectInstance),
}

impl Instance {
    pub(crate) fn assemble(schema: Arc<ModelSchema>, attributes: Attributes) -> Self {
        if schema.value_object {
            Instance::ValueObject(ValueObjectInstance { schema, attributes })
        } else {
            Instance::Entity(EntityInstance {
                schema,
                attributes,
                id: None,
            })
        }
    }

    pub fn model_name(&self) -> &str {
        match self {
            Instance::Entity(entity) => entity.model_name(),
            Instance::ValueObject(value_object) => value_object.model_name(),
        }
    }

    pub fn is_value_object(&self) -> bool {
        matches!(self, Instance::ValueObject(_))
    }

    pub fn as_entity(&self) -> Option<&EntityInstance> {
        match self {
            Instance::Entity(entity) => Some(entity),
            Instance::ValueObject(_) => None,
        }
    }

    pub fn as_entity_mut(&mut self) -> Option<&mut EntityInstance> {
        match self {
            Instance::Entity(entity) => Some(entity),
            Instance::ValueObject(_) => None,
        }
    }

    /// Unwraps the entity, handing the instance back if it is a value object.
    pub fn into_entity(self) -> Result<EntityInstance, Self> {
        match self {
            Instance::Entity(entity) => Ok(entity),
            other => Err(other),
        }
    }

    /// Unwraps the value object, handing the instance back if it is an entity.
    pub fn into_value_object(self) -> Result<ValueObjectInstance, Self> {
        match self {
            Instance::ValueObject(value_object) => Ok(value_object),
            other => Err(other),
        }
    }
}

impl From<EntityInstance> for Instance {
    fn from(entity: EntityInstance) -> Self {
        Instance::Entity(entity)
    }
}

impl From<ValueObjectInstance> for Instance {
    fn from(value_object: ValueObjectInstance) -> Self {
        Instance::ValueObject(value_object)
    }
}

#[cfg(test)]
mod tests {
    use crate::{attrs, FieldSpec, Identity, ModelFactory, ModelSpec};

    #[test]
    fn entity_identity_is_unset_until_assigned() {
        let person = ModelFactory::define(ModelSpec::new().attr("firstName", FieldSpec::text()))
            .unwrap();
        let mut instance = person.create(attrs! {}).unwrap();
        assert!(!instance.is_value_object());

        let entity = instance.as_entity_mut().unwrap();
        assert_eq!(entity.id(), None);
        entity.set_id("1234");
        assert_eq!(entity.id(), Some(&Identity::Text("1234".into())));
        entity.set_id(1234);
        assert_eq!(entity.id(), Some(&Identity::Number(1234)));
    }

    #[test]
    fn value_object_has_no_entity_view() {
        let address = ModelFactory::define(
            ModelSpec::new()
                .value_object(true)
                .attr("country", FieldSpec::text()),
        )
        .unwrap();
        let instance = address.create(attrs! { "country" => "US" }).unwrap();
        assert!(instance.is_value_object());
        assert!(instance.as_entity().is_none());
        assert!(instance.into_entity().unwrap_err().into_value_object().is_ok());
    }
}
