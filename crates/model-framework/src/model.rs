//! # Model Capabilities
//!
//! Two traits describe what the framework needs from a model and from an instance:
//!
//! - [`ModelType`]: anything that can build instances. Nested field types must
//!   implement it. [`ModelDefinition`](crate::ModelDefinition) is the implementation
//!   the factory produces.
//! - [`Serializable`]: anything that can project itself into plain data.

use std::sync::Arc;

use crate::error::ModelError;
use crate::instance::Instance;
use crate::value::Attributes;

/// Shared handle to a model, as stored in nested field specifications.
pub type ModelRef = Arc<dyn ModelType>;

/// A model that can build instances from attributes.
pub trait ModelType: Send + Sync {
    /// Name used in logs and error context.
    fn name(&self) -> &str;

    /// Validates `attrs` and builds an instance.
    fn create(&self, attrs: Attributes) -> Result<Instance, ModelError>;

    /// Builds an instance from trusted data without running validation.
    fn reconstitute(&self, attrs: Attributes) -> Result<Instance, ModelError>;

    /// `true` if instances have no identity.
    fn is_value_object(&self) -> bool;
}

/// Projection of an instance into plain data.
pub trait Serializable {
    /// Builds a fresh map of every attribute, plus `id` when identity is set.
    fn to_data(&self) -> serde_json::Map<String, serde_json::Value>;

    /// JSON text of [`to_data`](Self::to_data).
    fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(&self.to_data())?)
    }
}
