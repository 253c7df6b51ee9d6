//! # Model Sample Demo
//!
//! Walks through the lifecycle of the sample models:
//! 1.  Building the [`ModelCatalog`].
//! 2.  Creating a `Person` with a nested `Address` and giving it an identity.
//! 3.  Showing a nested validation failure.
//! 4.  Rehydrating a stored record without validation.

use model_framework::logging::setup_tracing;
use model_framework::{attrs, ModelError, Serializable};
use model_sample::catalog::ModelCatalog;
use serde_json::json;
use tracing::{error, info, info_span};

fn main() -> Result<(), ModelError> {
    setup_tracing();

    info!("Starting model sample");
    let catalog = ModelCatalog::new()?;

    let _span = info_span!("person_creation").entered();
    let mut sam = catalog.person.create(attrs! {
        "firstName" => "sam",
        "homeAddress" => attrs! {
            "street" => "123 1st St.",
            "city" => "anywhere",
            "state" => "ohio",
            "country" => "US",
        },
    })?;
    info!(person = %sam.to_json()?, "Person created");

    if let Some(entity) = sam.as_entity_mut() {
        entity.set_id(1234);
    }
    info!(person = %sam.to_json()?, "Identity assigned");

    // The address is missing its required country.
    match catalog.person.create(attrs! {
        "firstName" => "bob",
        "homeAddress" => attrs! { "city" => "anywhere" },
    }) {
        Ok(_) => error!("Invalid address was accepted"),
        Err(e) => info!(kind = e.name(), error = %e, "Rejected as expected"),
    }

    let stored = catalog.rehydrate_person(json!({
        "id": "p-1",
        "homeAddress": { "city": "anywhere" },
    }))?;
    info!(person = %stored.to_json()?, "Rehydrated without validation");

    info!("Model sample completed successfully");
    Ok(())
}
