//! Attribute validation run by `create`.
//!
//! Each check returns the failures it found. They are concatenated (required
//! fields first, in declaration order, then the custom hook) and raised once.

use crate::error::{ModelError, ValidationFailure};
use crate::schema::ModelSchema;
use crate::value::Attributes;

pub(crate) struct ValidationEngine<'a> {
    schema: &'a ModelSchema,
}

impl<'a> ValidationEngine<'a> {
    pub(crate) fn new(schema: &'a ModelSchema) -> Self {
        Self { schema }
    }

    pub(crate) fn validate(&self, attrs: &Attributes) -> Result<(), ModelError> {
        let mut failures = self.missing_required(attrs);
        failures.extend(self.custom(attrs));

        if failures.is_empty() {
            Ok(())
        } else {
            Err(ModelError::Validation {
                model: self.schema.name.clone(),
                failures,
            })
        }
    }

    /// A field counts as present when its key exists, even if the value is null.
    fn missing_required(&self, attrs: &Attributes) -> Vec<ValidationFailure> {
        self.schema
            .required
            .iter()
            .filter(|field| !attrs.contains_key(field))
            .map(|field| ValidationFailure::RequiredField {
                field: field.clone(),
            })
            .collect()
    }

    fn custom(&self, attrs: &Attributes) -> Option<ValidationFailure> {
        let validate = self.schema.validate.as_ref()?;
        validate(attrs).err().map(|e| ValidationFailure::Custom {
            message: e.to_string(),
        })
    }
}
