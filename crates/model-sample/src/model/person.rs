use chrono::Utc;
use model_framework::{Attributes, BoxError, FieldSpec, ModelSpec, Value};

use super::address::ADDRESS;
use super::error::PersonError;

/// Registered name of the person model.
pub const PERSON: &str = "Person";

/// A person. Entity, so it can be given an identity.
///
/// `homeAddress` refers to the registered [`ADDRESS`] model, so the address spec
/// must be defined first through the same factory.
pub fn person_spec() -> ModelSpec {
    ModelSpec::new()
        .named(PERSON)
        .attr("homeAddress", FieldSpec::named(ADDRESS))
        .attr("firstName", FieldSpec::text())
        .attr("birthDate", FieldSpec::timestamp())
        .validate(validate_person)
}

fn validate_person(attrs: &Attributes) -> Result<(), BoxError> {
    if let Some(Value::Text(name)) = attrs.get("firstName") {
        if name.trim().is_empty() {
            return Err(Box::new(PersonError::BlankName));
        }
    }
    if let Some(Value::Timestamp(born)) = attrs.get("birthDate") {
        if *born > Utc::now() {
            return Err(Box::new(PersonError::FutureBirthDate));
        }
    }
    Ok(())
}
