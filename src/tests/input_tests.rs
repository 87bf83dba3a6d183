use super::setup;
use crate::errors::TallyError;
use crate::input::{ parse_integers, parse_people, parse_person };
use crate::models::person::Person;
use crate::models::property::PropertyKind;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_parse_integers() {
    setup();
    let parsed = parse_integers(&strings(&["1", "-3", " 42 "])).unwrap();
    assert_eq!(parsed, vec![1, -3, 42]);
}

#[test]
fn test_parse_integers_rejects_text() {
    setup();
    let err = parse_integers(&strings(&["1", "two"])).unwrap_err();
    assert!(matches!(err, TallyError::InvalidInput(ref msg) if msg.contains("two")));
}

#[test]
fn test_parse_person() {
    setup();
    assert_eq!(parse_person("Alice:12321").unwrap(), Person::new("Alice", 12321));
    assert_eq!(parse_person("Dr: Who:-7").unwrap(), Person::new("Dr: Who", -7));
}

#[test]
fn test_parse_person_rejects_malformed_input() {
    setup();
    for input in ["Alice", ":12", "Alice:", "Alice:abc"] {
        assert!(
            matches!(parse_person(input), Err(TallyError::InvalidInput(_))),
            "{:?} should be rejected",
            input
        );
    }
}

#[test]
fn test_parse_people() {
    setup();
    let people = parse_people(&strings(&["Alice:1", "Bob:22"])).unwrap();
    assert_eq!(people.len(), 2);
    assert_eq!(people[1].name(), "Bob");
    assert_eq!(people[1].id(), 22);
}

#[test]
fn test_property_kind_names_round_trip() {
    setup();
    for kind in PropertyKind::ALL {
        assert_eq!(kind.name().parse::<PropertyKind>().unwrap(), kind);
    }
    assert_eq!("Palindrome_ID".parse::<PropertyKind>().unwrap(), PropertyKind::PalindromeId);
}

#[test]
fn test_property_kind_unknown_name() {
    setup();
    let err = "even".parse::<PropertyKind>().unwrap_err();
    assert!(matches!(err, TallyError::UnknownProperty(ref name) if name == "even"));
    assert_eq!(err.to_string(), "Unknown property: even");
}

#[test]
fn test_person_accessors() {
    setup();
    let mut person = Person::new("Alice", 12321);
    person.set_name("Alicia");
    person.set_id(5);
    assert_eq!(person.name(), "Alicia");
    assert_eq!(person.id(), 5);
    assert_eq!(person.to_string(), "Alicia (5)");
}
