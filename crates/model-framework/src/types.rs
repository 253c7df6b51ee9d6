//! # Field Types
//!
//! Declarative description of a single model attribute: its [`TypeRef`] and whether
//! it is required.

use std::fmt;
use std::sync::Arc;

use crate::model::{ModelRef, ModelType};

/// The fixed set of primitive attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Text,
    Number,
    Timestamp,
}

impl PrimitiveType {
    /// Resolves a primitive by name, ignoring case.
    ///
    /// `"string"` and `"date"` are accepted as aliases of `Text` and `Timestamp`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" | "string" => Some(Self::Text),
            "number" => Some(Self::Number),
            "timestamp" | "date" => Some(Self::Timestamp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The declared type of a field.
#[derive(Clone)]
pub enum TypeRef {
    Primitive(PrimitiveType),
    /// A nested model (entity or value object).
    Model(ModelRef),
    /// Resolved when the model is defined: against the primitive names first,
    /// then against models registered in the [`ModelFactory`](crate::ModelFactory).
    Named(String),
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(primitive) => write!(f, "Primitive({primitive})"),
            TypeRef::Model(model) => write!(f, "Model({})", model.name()),
            TypeRef::Named(name) => write!(f, "Named({name:?})"),
        }
    }
}

impl From<PrimitiveType> for TypeRef {
    fn from(primitive: PrimitiveType) -> Self {
        TypeRef::Primitive(primitive)
    }
}

impl From<ModelRef> for TypeRef {
    fn from(model: ModelRef) -> Self {
        TypeRef::Model(model)
    }
}

/// One entry of a field specification.
///
/// ```rust
/// use model_framework::FieldSpec;
///
/// let country = FieldSpec::text().required();
/// assert!(country.is_required());
/// ```
#[derive(Debug, Clone)]
pub struct FieldSpec {
    ty: TypeRef,
    required: bool,
}

impl FieldSpec {
    pub fn new(ty: impl Into<TypeRef>) -> Self {
        Self {
            ty: ty.into(),
            required: false,
        }
    }

    pub fn text() -> Self {
        Self::new(PrimitiveType::Text)
    }

    pub fn number() -> Self {
        Self::new(PrimitiveType::Number)
    }

    pub fn timestamp() -> Self {
        Self::new(PrimitiveType::Timestamp)
    }

    /// A field whose values are instances of `model`.
    pub fn model<M>(model: &M) -> Self
    where
        M: ModelType + Clone + 'static,
    {
        Self::new(Arc::new(model.clone()) as ModelRef)
    }

    /// A field whose type is looked up by name at definition time.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(TypeRef::Named(name.into()))
    }

    /// Marks the field as required at `create` time.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.ty
    }
}
