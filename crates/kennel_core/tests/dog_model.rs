use kennel_core::Dog;

#[test]
fn dog_new_starts_unsaved() {
    let dog = Dog::new("Rex", "Lab");

    assert_eq!(dog.id, None);
    assert_eq!(dog.name, "Rex");
    assert_eq!(dog.breed, "Lab");
    assert!(!dog.is_saved());
}

#[test]
fn with_id_materializes_saved_instance() {
    let dog = Dog::with_id(7, "Fido", "Beagle");

    assert_eq!(dog.id, Some(7));
    assert!(dog.is_saved());
}

#[test]
fn dog_serialization_uses_expected_wire_fields() {
    let dog = Dog::with_id(3, "Luna", "Husky");

    let json = serde_json::to_value(&dog).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["name"], "Luna");
    assert_eq!(json["breed"], "Husky");

    let decoded: Dog = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, dog);
}

#[test]
fn unsaved_dog_serializes_null_id() {
    let dog = Dog::new("Rex", "Lab");

    let json = serde_json::to_value(&dog).unwrap();
    assert!(json["id"].is_null());
}
