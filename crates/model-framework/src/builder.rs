//! Instance assembly shared by `create` and `reconstitute`.

use std::sync::Arc;

use crate::error::ModelError;
use crate::instance::Instance;
use crate::schema::ModelSchema;
use crate::serializer::ID_KEY;
use crate::validation::ValidationEngine;
use crate::value::{Attributes, Value};

/// How attributes are treated while building an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Validate, then build nested values with `create`.
    Create,
    /// Trust the input and build nested values with `reconstitute`.
    Reconstitute,
}

pub(crate) struct InstanceBuilder<'a> {
    schema: &'a Arc<ModelSchema>,
    mode: Mode,
}

impl<'a> InstanceBuilder<'a> {
    pub(crate) fn new(schema: &'a Arc<ModelSchema>, mode: Mode) -> Self {
        Self { schema, mode }
    }

    pub(crate) fn build(self, mut attrs: Attributes) -> Result<Instance, ModelError> {
        // Entity identity lives outside the attributes, in both modes.
        if !self.schema.value_object && attrs.contains_key(ID_KEY) {
            return Err(ModelError::ReservedKey {
                model: self.schema.name.clone(),
                key: ID_KEY,
            });
        }

        if self.mode == Mode::Create {
            ValidationEngine::new(self.schema).validate(&attrs)?;
        }

        for (field, value) in attrs.iter_mut() {
            let Some(model) = self.schema.nested_model(field) else {
                continue;
            };

            *value = match std::mem::replace(value, Value::Null) {
                // Nested errors propagate as-is, never wrapped.
                Value::Map(data) => Value::Instance(match self.mode {
                    Mode::Create => model.create(data)?,
                    Mode::Reconstitute => model.reconstitute(data)?,
                }),
                resolved @ (Value::Instance(_) | Value::Null) => resolved,
                other => {
                    return Err(ModelError::Shape {
                        context: format!("{field} of {}", self.schema.name),
                        found: other.kind(),
                    })
                }
            };
        }

        Ok(Instance::assemble(Arc::clone(self.schema), attrs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use crate::definition::ModelFactory;
    use crate::model::Serializable;
    use crate::schema::ModelSpec;
    use crate::types::FieldSpec;
    use serde_json::json;

    fn models() -> (crate::ModelDefinition, crate::ModelDefinition) {
        let mut factory = ModelFactory::new();
        let address = factory
            .create(
                ModelSpec::new()
                    .named("Address")
                    .value_object(true)
                    .attr("city", FieldSpec::text())
                    .attr("country", FieldSpec::text().required()),
            )
            .unwrap();
        let person = factory
            .create(
                ModelSpec::new()
                    .named("Person")
                    .attr("homeAddress", FieldSpec::model(&address))
                    .attr("firstName", FieldSpec::text().required()),
            )
            .unwrap();
        (address, person)
    }

    #[test]
    fn prebuilt_nested_instance_is_kept() {
        let (address, person) = models();
        let home = address.create(attrs! { "country" => "US" }).unwrap();
        let bob = person
            .create(attrs! { "firstName" => "bob", "homeAddress" => home })
            .unwrap();
        assert_eq!(
            serde_json::Value::Object(bob.to_data()),
            json!({ "firstName": "bob", "homeAddress": { "country": "US" } })
        );
    }

    #[test]
    fn null_nested_value_passes_through() {
        let (_, person) = models();
        let bob = person
            .create(attrs! { "firstName" => "bob", "homeAddress" => Value::Null })
            .unwrap();
        assert_eq!(
            serde_json::Value::Object(bob.to_data()),
            json!({ "firstName": "bob", "homeAddress": null })
        );
    }

    #[test]
    fn malformed_nested_value_is_rejected_in_both_modes() {
        let (_, person) = models();
        let attrs = attrs! { "firstName" => "bob", "homeAddress" => "123 1st St." };

        for result in [person.create(attrs.clone()), person.reconstitute(attrs)] {
            let err = result.unwrap_err();
            assert_eq!(err.name(), "Shape Error");
            assert_eq!(
                err.to_string(),
                "Expected attribute data for homeAddress of Person, found text"
            );
        }
    }

    #[test]
    fn outer_validation_runs_before_nested_construction() {
        let (_, person) = models();
        let err = person
            .create(attrs! { "homeAddress" => attrs! { "city" => "anywhere" } })
            .unwrap_err();
        assert_eq!(err.model(), Some("Person"));
        assert_eq!(err.to_string(), "Required field: firstName");
    }

    #[test]
    fn entity_rejects_id_attribute_in_both_modes() {
        let (_, person) = models();
        let attrs = attrs! { "id" => "attr", "firstName" => "sam" };

        for result in [person.create(attrs.clone()), person.reconstitute(attrs)] {
            let err = result.unwrap_err();
            assert!(matches!(err, ModelError::ReservedKey { key: "id", .. }));
            assert_eq!(err.model(), Some("Person"));
        }
    }

    #[test]
    fn value_object_may_carry_id_attribute() {
        let (address, _) = models();
        let home = address
            .create(attrs! { "id" => "a-1", "country" => "US" })
            .unwrap();
        assert_eq!(
            serde_json::Value::Object(home.to_data()),
            json!({ "id": "a-1", "country": "US" })
        );
    }

    #[test]
    fn reconstitute_skips_nested_validation() {
        let (_, person) = models();
        let bob = person
            .reconstitute(attrs! { "homeAddress" => attrs! { "city" => "anywhere" } })
            .unwrap();
        assert_eq!(
            serde_json::Value::Object(bob.to_data()),
            json!({ "homeAddress": { "city": "anywhere" } })
        );
    }
}
