//! # Model Definitions
//!
//! [`ModelFactory`] turns a [`ModelSpec`] into a [`ModelDefinition`]: a cheap-to-clone
//! handle over an immutable [`ModelSchema`] that can build any number of instances.
//!
//! ```rust
//! use model_framework::{attrs, FieldSpec, ModelFactory, ModelSpec, Serializable};
//!
//! let mut factory = ModelFactory::new();
//! factory
//!     .create(
//!         ModelSpec::new()
//!             .named("Address")
//!             .value_object(true)
//!             .attr("city", FieldSpec::text())
//!             .attr("country", FieldSpec::text().required()),
//!     )
//!     .unwrap();
//! let person = factory
//!     .create(
//!         ModelSpec::new()
//!             .named("Person")
//!             .attr("homeAddress", FieldSpec::named("Address"))
//!             .attr("firstName", FieldSpec::text()),
//!     )
//!     .unwrap();
//!
//! let err = person
//!     .create(attrs! { "homeAddress" => attrs! { "city" => "anywhere" } })
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "Required field: country");
//!
//! let sam = person.create(attrs! { "firstName" => "sam" }).unwrap();
//! assert_eq!(sam.to_json().unwrap(), r#"{"firstName":"sam"}"#);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::builder::{InstanceBuilder, Mode};
use crate::error::ModelError;
use crate::instance::Instance;
use crate::model::ModelType;
use crate::schema::{FieldSpecValidator, ModelSchema, ModelSpec, DEFAULT_MODEL_NAME};
use crate::value::Attributes;

/// A validated model, ready to build instances.
///
/// Cloning is cheap: clones share the same schema.
#[derive(Clone)]
pub struct ModelDefinition {
    schema: Arc<ModelSchema>,
}

impl ModelDefinition {
    /// Validates `attrs` and builds an instance.
    ///
    /// Nested model fields given as attribute data are built with the nested
    /// model's own `create`, so their validation errors surface unchanged.
    pub fn create(&self, attrs: Attributes) -> Result<Instance, ModelError> {
        self.build(attrs, Mode::Create)
    }

    /// Rebuilds an instance from previously persisted data.
    ///
    /// Neither required fields nor the custom hook are checked, at this level or
    /// in nested models.
    pub fn reconstitute(&self, attrs: Attributes) -> Result<Instance, ModelError> {
        self.build(attrs, Mode::Reconstitute)
    }

    pub fn is_value_object(&self) -> bool {
        self.schema.value_object
    }

    pub fn name(&self) -> &str {
        &self.schema.name
    }

    pub fn required_fields(&self) -> &[String] {
        &self.schema.required
    }

    pub fn optional_fields(&self) -> &[String] {
        &self.schema.optional
    }

    /// Names of the fields whose type is another model.
    pub fn nested_fields(&self) -> impl Iterator<Item = &str> {
        self.schema.nested.iter().map(|(name, _)| name.as_str())
    }

    fn build(&self, attrs: Attributes, mode: Mode) -> Result<Instance, ModelError> {
        let model = self.name();
        debug!(model, ?mode, ?attrs, "Build");
        let result = InstanceBuilder::new(&self.schema, mode).build(attrs);
        match &result {
            Ok(_) => debug!(model, ?mode, "Built"),
            Err(e) => warn!(model, ?mode, error = %e, "Build failed"),
        }
        result
    }
}

impl ModelType for ModelDefinition {
    fn name(&self) -> &str {
        ModelDefinition::name(self)
    }

    fn create(&self, attrs: Attributes) -> Result<Instance, ModelError> {
        ModelDefinition::create(self, attrs)
    }

    fn reconstitute(&self, attrs: Attributes) -> Result<Instance, ModelError> {
        ModelDefinition::reconstitute(self, attrs)
    }

    fn is_value_object(&self) -> bool {
        ModelDefinition::is_value_object(self)
    }
}

impl fmt::Debug for ModelDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModelDefinition").field(&self.schema).finish()
    }
}

/// Defines models and remembers the named ones.
///
/// A later spec can refer to a registered model with
/// [`FieldSpec::named`](crate::FieldSpec::named). Each factory starts empty.
#[derive(Debug, Default)]
pub struct ModelFactory {
    registry: HashMap<String, ModelDefinition>,
}

impl ModelFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `spec` and returns its definition.
    ///
    /// Fails with [`ModelError::Definition`] listing every field whose type cannot
    /// be resolved. No partial definition is kept.
    pub fn create(&mut self, spec: ModelSpec) -> Result<ModelDefinition, ModelError> {
        let name = spec.name().map(str::to_owned);
        let definition = define_with(spec, &self.registry)?;

        if let Some(name) = name {
            if self
                .registry
                .insert(name.clone(), definition.clone())
                .is_some()
            {
                warn!(model = %name, "Replaced registered model");
            }
            info!(model = %name, size = self.registry.len(), "Registered");
        }
        Ok(definition)
    }

    /// Defines a model without a factory. Only primitive names and explicit
    /// model references resolve.
    pub fn define(spec: ModelSpec) -> Result<ModelDefinition, ModelError> {
        define_with(spec, &HashMap::new())
    }

    /// A previously registered model.
    pub fn get(&self, name: &str) -> Option<&ModelDefinition> {
        self.registry.get(name)
    }
}

fn define_with(
    spec: ModelSpec,
    registry: &HashMap<String, ModelDefinition>,
) -> Result<ModelDefinition, ModelError> {
    let model = spec.name().unwrap_or(DEFAULT_MODEL_NAME).to_owned();
    debug!(model = %model, ?spec, "Define");

    match FieldSpecValidator::new(registry).validate(spec) {
        Ok(schema) => Ok(ModelDefinition {
            schema: Arc::new(schema),
        }),
        Err(failures) => {
            let err = ModelError::Definition { model, failures };
            warn!(error = %err, "Definition failed");
            Err(err)
        }
    }
}
