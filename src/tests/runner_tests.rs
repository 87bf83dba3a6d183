use log::info;

use super::setup;
use crate::config::{ NegativeIdPolicy, TallyConfig };
use crate::errors::TallyError;
use crate::implementations::check_identifiers;
use crate::models::person::Person;
use crate::models::property::PropertyKind;
use crate::runner::{ count_values, run_sample };

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_run_sample_counts_one() {
    setup();
    info!("Running the sample with default configuration");
    assert_eq!(run_sample(&TallyConfig::default()).unwrap(), 1);
}

#[test]
fn test_run_sample_with_negative_ids() {
    setup();
    let mut config = TallyConfig::default();
    config.people.push(Person::new("Negative", -121));
    assert_eq!(run_sample(&config).unwrap(), 1);

    config.negative_ids = NegativeIdPolicy::Reject;
    let err = run_sample(&config).unwrap_err();
    assert!(
        matches!(err, TallyError::NegativeIdentifier { ref name, id } if name == "Negative" && id == -121)
    );
}

#[test]
fn test_check_identifiers() {
    setup();
    let people = vec![Person::new("Zero", 0), Person::new("Minus", -1)];
    assert!(check_identifiers(&people, NegativeIdPolicy::Preserve).is_ok());
    assert!(check_identifiers(&people[..1], NegativeIdPolicy::Reject).is_ok());
    assert!(check_identifiers(&people, NegativeIdPolicy::Reject).is_err());
}

#[test]
fn test_count_values_for_each_property() {
    setup();
    let config = TallyConfig::default();

    let report = count_values(PropertyKind::Odd, &strings(&["-3", "-2", "0", "1", "7"]), &config).unwrap();
    assert_eq!((report.total, report.matching), (5, 3));

    let report = count_values(PropertyKind::Prime, &strings(&["2", "9", "104729"]), &config).unwrap();
    assert_eq!((report.total, report.matching), (3, 2));

    let report = count_values(PropertyKind::Palindrome, &strings(&["abba", "abc"]), &config).unwrap();
    assert_eq!((report.total, report.matching), (2, 1));

    let report = count_values(PropertyKind::PalindromeId, &strings(&["Ann:11", "Ben:12"]), &config).unwrap();
    assert_eq!((report.total, report.matching), (2, 1));
    assert_eq!(report.property, "palindrome-id");
}

#[test]
fn test_count_values_palindrome_id_uses_configured_people() {
    setup();
    let report = count_values(PropertyKind::PalindromeId, &[], &TallyConfig::default()).unwrap();
    assert_eq!((report.total, report.matching), (3, 1));
}

#[test]
fn test_count_values_invalid_input() {
    setup();
    let err = count_values(PropertyKind::Prime, &strings(&["seven"]), &TallyConfig::default()).unwrap_err();
    assert!(matches!(err, TallyError::InvalidInput(_)));
}

#[test]
fn test_report_json() {
    setup();
    let report = count_values(PropertyKind::Odd, &strings(&["1", "2"]), &TallyConfig::default()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["property"], "odd");
    assert_eq!(json["total"], 2);
    assert_eq!(json["matching"], 1);
}
