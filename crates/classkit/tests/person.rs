use classkit::{
    error::{ConfigErrorKind, ErrorKind, ErrorOrigin},
    prelude::*,
};

// ---- entity declarations -----------------------------------------------

static PERSON: EntityModel = EntityModel::new("app::Person", "Person")
    .slotted(&["name", "age"])
    .typed(&[FieldKind::Text, FieldKind::Int])
    .immutable()
    .cached();

static TAGGED: EntityModel = EntityModel::new("app::Tagged", "Tagged")
    .slotted(&["label", "tags"])
    .typed(&[FieldKind::Text, FieldKind::List(&FieldKind::Text)]);

static BROKEN: EntityModel = EntityModel::new("app::Broken", "Broken")
    .slotted(&["a", "a"])
    .immutable();

struct Person;

impl Path for Person {
    const PATH: &'static str = "app::Person";
}

impl EntityKind for Person {
    const MODEL: &'static EntityModel = &PERSON;
}

struct Misbound;

impl Path for Misbound {
    const PATH: &'static str = "app::Elsewhere";
}

impl EntityKind for Misbound {
    const MODEL: &'static EntityModel = &PERSON;
}

// ---- scenarios ---------------------------------------------------------

#[test]
fn person_lifecycle() {
    let composer = Composer::new();

    let alice = composer.construct_kind::<Person>(args!["Alice", 25]).unwrap();
    assert_eq!(alice.to_string(), "Person(name=Alice, age=25)");
    assert_eq!(alice.model().capabilities, Capabilities::ALL);

    let same = composer.construct_kind::<Person>(args!["Alice", 25]).unwrap();
    assert!(alice.same_instance(&same));

    let err: classkit::Error = alice.set("age", 26).unwrap_err().into();
    assert_eq!(err.kind, ErrorKind::Immutability);
    assert_eq!(err.origin, ErrorOrigin::Write);
    assert_eq!(alice.get("age"), Some(Value::Int(25)));

    let half = Value::from_f64(22.5).unwrap();
    let err: classkit::Error = composer
        .construct_kind::<Person>(args!["Bob", half])
        .unwrap_err()
        .into();
    assert_eq!(err.kind, ErrorKind::TypeConstraint);
    assert_eq!(err.message, "22.5 should be of type Int. Got type Float");
    assert_eq!(composer.cache().len(), 1);
}

#[test]
fn nested_kinds_check_every_element() {
    let composer = Composer::new();

    let ok = composer
        .construct(&TAGGED, args!["x", vec![Value::from("a"), Value::from("b")]])
        .unwrap();
    assert_eq!(ok.to_string(), "Tagged(label=x, tags=[a, b])");

    let err = composer
        .construct(&TAGGED, args!["x", vec![Value::from("a"), Value::Int(1)]])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "[a, 1] should be of type List<Text>. Got type List"
    );
}

#[test]
fn registry_validates_at_definition_time() {
    let mut registry = EntityRegistry::new();

    registry.register_kind::<Person>().unwrap();
    assert!(registry.contains("app::Person"));

    let err: classkit::Error = registry.register(&PERSON).unwrap_err().into();
    assert_eq!(err.kind, ErrorKind::Config(ConfigErrorKind::DuplicatePath));

    let err: classkit::Error = registry.register(&BROKEN).unwrap_err().into();
    assert_eq!(err.kind, ErrorKind::Config(ConfigErrorKind::DuplicateSlot));
    assert_eq!(err.origin, ErrorOrigin::Construct);

    let err: classkit::Error = EntityRegistry::new()
        .register_kind::<Misbound>()
        .unwrap_err()
        .into();
    assert_eq!(err.kind, ErrorKind::Config(ConfigErrorKind::PathMismatch));
    assert_eq!(registry.len(), 1);
}

#[test]
fn version_is_exported() {
    assert!(!classkit::VERSION.is_empty());
}
