//! # Model Errors
//!
//! Every failure the framework raises is a [`ModelError`]. Definition and validation
//! errors carry the full list of per-field failures, so callers can match on the cause
//! instead of parsing messages. The `Display` output is the failure messages joined
//! with `,`, in the order they were recorded.

use std::fmt::Display;

/// Error type returned by custom validation hooks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A single problem found while validating a field specification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionFailure {
    /// The field's type is neither a primitive nor a model.
    #[error("Invalid type specified for: {field}")]
    InvalidType { field: String },
}

/// A single problem found while validating attributes at `create` time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    /// Raised by the model's custom validation hook.
    #[error("{message}")]
    Custom { message: String },
}

/// Errors that can occur while defining models or building instances.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// One or more fields reference a type that cannot be resolved.
    /// The definition attempt fails as a whole.
    #[error("{}", join(.failures))]
    Definition {
        model: String,
        failures: Vec<DefinitionFailure>,
    },

    /// Required fields are missing and/or custom validation failed.
    /// Only failures from a single model level are aggregated here.
    #[error("{}", join(.failures))]
    Validation {
        model: String,
        failures: Vec<ValidationFailure>,
    },

    /// A nested model field was given a value that is not attribute data.
    #[error("Expected attribute data for {context}, found {found}")]
    Shape {
        context: String,
        found: &'static str,
    },

    /// An entity was given an attribute under a key reserved for its identity.
    #[error("Reserved key {key} cannot be an attribute of {model}")]
    ReservedKey { model: String, key: &'static str },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ModelError {
    /// Human readable error kind, e.g. `"Validation Error"`.
    pub fn name(&self) -> &'static str {
        match self {
            ModelError::Definition { .. } => "Model Definition Error",
            ModelError::Validation { .. } => "Validation Error",
            ModelError::Shape { .. } => "Shape Error",
            ModelError::ReservedKey { .. } => "Reserved Key Error",
            ModelError::Serialization(_) => "Serialization Error",
        }
    }

    /// Name of the model that raised the error, when known.
    pub fn model(&self) -> Option<&str> {
        match self {
            ModelError::Definition { model, .. }
            | ModelError::Validation { model, .. }
            | ModelError::ReservedKey { model, .. } => Some(model.as_str()),
            _ => None,
        }
    }

    pub fn definition_failures(&self) -> &[DefinitionFailure] {
        match self {
            ModelError::Definition { failures, .. } => failures.as_slice(),
            _ => &[],
        }
    }

    pub fn validation_failures(&self) -> &[ValidationFailure] {
        match self {
            ModelError::Validation { failures, .. } => failures.as_slice(),
            _ => &[],
        }
    }
}

fn join<T: Display>(failures: &[T]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
