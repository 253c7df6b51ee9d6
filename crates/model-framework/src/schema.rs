//! # Model Specifications
//!
//! [`ModelSpec`] is the declarative input to the [`ModelFactory`](crate::ModelFactory).
//! The [`FieldSpecValidator`] checks it once at definition time and produces the
//! immutable [`ModelSchema`] that a definition and all of its instances share.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::definition::ModelDefinition;
use crate::error::{BoxError, DefinitionFailure};
use crate::model::ModelRef;
use crate::types::{FieldSpec, PrimitiveType, TypeRef};
use crate::value::Attributes;

/// Custom validation hook, run by `create` after the required-field checks.
pub type Validator = dyn Fn(&Attributes) -> Result<(), BoxError> + Send + Sync;

pub(crate) const DEFAULT_MODEL_NAME: &str = "Model";

/// Declarative description of a model.
///
/// ```rust
/// use model_framework::{FieldSpec, ModelSpec};
///
/// let spec = ModelSpec::new()
///     .named("Address")
///     .value_object(true)
///     .attr("street", FieldSpec::text())
///     .attr("country", FieldSpec::text().required());
/// assert_eq!(spec.fields().count(), 2);
/// ```
#[derive(Clone, Default)]
pub struct ModelSpec {
    name: Option<String>,
    attrs: Vec<(String, FieldSpec)>,
    value_object: bool,
    validate: Option<Arc<Validator>>,
}

impl ModelSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the model. Named models are registered by the factory that defines them.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a field. Declaring the same name twice replaces the earlier spec.
    pub fn attr(mut self, name: impl Into<String>, field: FieldSpec) -> Self {
        let name = name.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = field,
            None => self.attrs.push((name, field)),
        }
        self
    }

    pub fn value_object(mut self, value_object: bool) -> Self {
        self.value_object = value_object;
        self
    }

    /// Sets the custom validation hook.
    pub fn validate<F>(mut self, validate: F) -> Self
    where
        F: Fn(&Attributes) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.validate = Some(Arc::new(validate));
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.attrs.iter().map(|(name, field)| (name.as_str(), field))
    }
}

impl fmt::Debug for ModelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSpec")
            .field("name", &self.name)
            .field("attrs", &self.attrs)
            .field("value_object", &self.value_object)
            .field("validate", &self.validate.is_some())
            .finish()
    }
}

/// Immutable configuration of a defined model.
pub struct ModelSchema {
    pub(crate) name: String,
    pub(crate) required: Vec<String>,
    pub(crate) optional: Vec<String>,
    pub(crate) nested: Vec<(String, ModelRef)>,
    pub(crate) value_object: bool,
    pub(crate) validate: Option<Arc<Validator>>,
}

impl ModelSchema {
    /// The model of a nested-model field, or `None` for primitive and unknown fields.
    pub(crate) fn nested_model(&self, field: &str) -> Option<&ModelRef> {
        self.nested
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, model)| model)
    }
}

impl fmt::Debug for ModelSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSchema")
            .field("name", &self.name)
            .field("required", &self.required)
            .field("optional", &self.optional)
            .field(
                "nested",
                &self.nested.iter().map(|(n, _)| n).collect::<Vec<_>>(),
            )
            .field("value_object", &self.value_object)
            .finish()
    }
}

/// Checks every field of a [`ModelSpec`] and partitions the field names.
///
/// Failures are collected for all fields before anything is reported, so one
/// definition error lists every unresolvable type.
pub(crate) struct FieldSpecValidator<'a> {
    registry: &'a HashMap<String, ModelDefinition>,
}

impl<'a> FieldSpecValidator<'a> {
    pub(crate) fn new(registry: &'a HashMap<String, ModelDefinition>) -> Self {
        Self { registry }
    }

    pub(crate) fn validate(&self, spec: ModelSpec) -> Result<ModelSchema, Vec<DefinitionFailure>> {
        let mut failures = Vec::new();
        let mut required = Vec::new();
        let mut optional = Vec::new();
        let mut nested = Vec::new();

        for (field, field_spec) in &spec.attrs {
            if field_spec.is_required() {
                required.push(field.clone());
            } else {
                optional.push(field.clone());
            }

            match self.resolve(field_spec.type_ref()) {
                Some(Resolved::Primitive) => {}
                Some(Resolved::Model(model)) => nested.push((field.clone(), model)),
                None => failures.push(DefinitionFailure::InvalidType {
                    field: field.clone(),
                }),
            }
        }

        if !failures.is_empty() {
            return Err(failures);
        }

        Ok(ModelSchema {
            name: spec.name.unwrap_or_else(|| DEFAULT_MODEL_NAME.to_owned()),
            required,
            optional,
            nested,
            value_object: spec.value_object,
            validate: spec.validate,
        })
    }

    fn resolve(&self, ty: &TypeRef) -> Option<Resolved> {
        match ty {
            TypeRef::Primitive(_) => Some(Resolved::Primitive),
            // Entities and value objects can both be nested.
            TypeRef::Model(model) => Some(Resolved::Model(Arc::clone(model))),
            TypeRef::Named(name) => {
                if PrimitiveType::from_name(name).is_some() {
                    return Some(Resolved::Primitive);
                }
                self.registry
                    .get(name)
                    .map(|definition| Resolved::Model(Arc::new(definition.clone()) as ModelRef))
            }
        }
    }
}

enum Resolved {
    Primitive,
    Model(ModelRef),
}
