use chrono::{TimeZone, Utc};
use model_framework::{attrs, Attributes, Identity, ModelError, Serializable};
use model_sample::catalog::ModelCatalog;
use model_sample::model::PersonError;
use serde_json::json;

fn full_address() -> Attributes {
    attrs! {
        "street" => "123 1st St.",
        "city" => "anywhere",
        "state" => "ohio",
        "country" => "US",
    }
}

/// A nested value object missing a required field fails with exactly the
/// nested error.
#[test]
fn test_missing_country_surfaces_unwrapped() {
    let catalog = ModelCatalog::new().expect("Failed to build catalog");

    let err = catalog
        .person
        .create(attrs! {
            "homeAddress" => attrs! {
                "street" => "123 1st St.",
                "city" => "anywhere",
                "state" => "ohio",
            },
        })
        .unwrap_err();

    assert_eq!(err.name(), "Validation Error");
    assert_eq!(err.to_string(), "Required field: country");
}

#[test]
fn test_first_name_round_trips_through_json() {
    let catalog = ModelCatalog::new().expect("Failed to build catalog");
    let sam = catalog
        .person
        .create(attrs! { "firstName" => "sam" })
        .expect("Failed to create person");

    let parsed: serde_json::Value =
        serde_json::from_str(&sam.to_json().expect("Failed to encode")).expect("Invalid JSON");
    assert_eq!(parsed, json!({ "firstName": "sam" }));
}

#[test]
fn test_identity_lifecycle() {
    let catalog = ModelCatalog::new().expect("Failed to build catalog");
    let mut person = catalog
        .person
        .create(attrs! { "firstName" => "sam" })
        .expect("Failed to create person");
    let entity = person.as_entity_mut().expect("Person is an entity");
    assert_eq!(entity.id(), None);

    entity.set_id("1234");
    assert_eq!(entity.id(), Some(&Identity::Text("1234".into())));

    entity.set_id(1234);
    assert_eq!(entity.id(), Some(&Identity::Number(1234)));
    assert_eq!(
        serde_json::Value::Object(person.to_data()),
        json!({ "firstName": "sam", "id": 1234 })
    );
}

#[test]
fn test_address_is_a_value_object() {
    let catalog = ModelCatalog::new().expect("Failed to build catalog");
    let address = catalog
        .address
        .create(full_address())
        .expect("Failed to create address");
    assert!(address.is_value_object());
    assert!(address.as_entity().is_none());
}

#[test]
fn test_create_and_reconstitute_agree() {
    let catalog = ModelCatalog::new().expect("Failed to build catalog");
    let attrs = attrs! { "homeAddress" => full_address(), "firstName" => "bob" };

    let created = catalog.person.create(attrs.clone()).unwrap();
    let reconstituted = catalog.person.reconstitute(attrs).unwrap();
    assert_eq!(created.to_data(), reconstituted.to_data());
}

#[test]
fn test_person_rules_are_enforced_on_create_only() {
    let catalog = ModelCatalog::new().expect("Failed to build catalog");
    let future = Utc.with_ymd_and_hms(2999, 1, 1, 0, 0, 0).unwrap();

    let err = catalog
        .person
        .create(attrs! { "firstName" => "  " })
        .unwrap_err();
    assert_eq!(err.to_string(), PersonError::BlankName.to_string());

    let err = catalog
        .person
        .create(attrs! { "firstName" => "sam", "birthDate" => future })
        .unwrap_err();
    assert!(matches!(err, ModelError::Validation { .. }));
    assert_eq!(err.to_string(), "birthDate must not be in the future");

    let ghost = catalog
        .person
        .reconstitute(attrs! { "firstName" => "  ", "birthDate" => future })
        .expect("Reconstitution skips validation");
    assert_eq!(
        serde_json::Value::Object(ghost.to_data()),
        json!({ "firstName": "  ", "birthDate": "2999-01-01T00:00:00.000Z" })
    );
}

#[test]
fn test_rehydrate_stored_record() {
    let catalog = ModelCatalog::new().expect("Failed to build catalog");
    let record = json!({
        "homeAddress": { "street": "123 1st St.", "city": "anywhere", "state": "ohio" },
        "firstName": "bob",
        "id": 42,
    });

    let person = catalog
        .rehydrate_person(record.clone())
        .expect("Failed to rehydrate");
    assert_eq!(
        person.as_entity().and_then(|e| e.id()),
        Some(&Identity::Number(42))
    );
    assert_eq!(serde_json::Value::Object(person.to_data()), record);
}
