//! # Model Framework
//!
//! A schema-driven factory for domain model types. A declarative field
//! specification ([`ModelSpec`]) is validated once by a [`ModelFactory`] and becomes
//! a reusable [`ModelDefinition`]. The definition builds encapsulated instances:
//!
//! - **Entities** ([`EntityInstance`]) carry an optional, settable [`Identity`].
//! - **Value objects** ([`ValueObjectInstance`]) have no identity and can be nested
//!   inside other models.
//!
//! ## Building Instances
//!
//! - [`ModelDefinition::create`] checks required fields and runs the custom hook,
//!   collecting every failure into one [`ModelError::Validation`]. Nested attribute
//!   data is built with the nested model's own `create`, so a nested failure
//!   surfaces unchanged.
//! - [`ModelDefinition::reconstitute`] trusts its input. It is the path for
//!   repositories that rehydrate previously persisted state.
//!
//! Instances never expose their attributes directly. [`Serializable::to_data`] and
//! [`Serializable::to_json`] project them (recursively) into plain data, with the
//! entity identity under `id` once it is set.
//!
//! ```rust
//! use model_framework::{attrs, FieldSpec, ModelFactory, ModelSpec, Serializable};
//!
//! let mut factory = ModelFactory::new();
//! let person = factory
//!     .create(ModelSpec::new().named("Person").attr("firstName", FieldSpec::text()))
//!     .unwrap();
//!
//! let mut bob = person.create(attrs! { "firstName" => "Bob" }).unwrap();
//! bob.as_entity_mut().unwrap().set_id(1234);
//! assert_eq!(bob.to_json().unwrap(), r#"{"firstName":"Bob","id":1234}"#);
//! ```
//!
//! ## Capabilities
//!
//! Nested field types are anything implementing [`ModelType`], so hand-written
//! models can be mixed with factory-made ones.
//!
//! ## Logging
//!
//! See the [`logging`] module.

mod builder;
pub mod definition;
pub mod error;
pub mod instance;
pub mod logging;
pub mod model;
pub mod schema;
pub mod serializer;
pub mod types;
mod validation;
pub mod value;

pub use builder::Mode;
pub use definition::{ModelDefinition, ModelFactory};
pub use error::{BoxError, DefinitionFailure, ModelError, ValidationFailure};
pub use instance::{EntityInstance, Instance, ValueObjectInstance};
pub use model::{ModelRef, ModelType, Serializable};
pub use schema::{ModelSchema, ModelSpec, Validator};
pub use serializer::{Serializer, ID_KEY};
pub use types::{FieldSpec, PrimitiveType, TypeRef};
pub use value::{Attributes, Identity, Value};
