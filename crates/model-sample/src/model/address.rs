use model_framework::{FieldSpec, ModelSpec};

/// Registered name of the address model.
pub const ADDRESS: &str = "Address";

/// A postal address. Value object, so it has no identity.
///
/// Only `country` is required.
pub fn address_spec() -> ModelSpec {
    ModelSpec::new()
        .named(ADDRESS)
        .value_object(true)
        .attr("street", FieldSpec::text())
        .attr("city", FieldSpec::text())
        .attr("state", FieldSpec::text())
        .attr("country", FieldSpec::text().required())
}
