use log::info;

use crate::config::TallyConfig;
use crate::counting::count_elements_with_property;
use crate::errors::TallyResult;
use crate::implementations::{
    check_identifiers,
    OddProperty,
    PalindromeIdProperty,
    PalindromeProperty,
    PrimeProperty,
};
use crate::input::{ parse_integers, parse_people };
use crate::models::person::Person;
use crate::models::property::PropertyKind;
use crate::models::report::CountReport;

/// Count how many of the configured people have a palindromic identifier
pub fn run_sample(config: &TallyConfig) -> TallyResult<usize> {
    info!("Counting palindromic identifiers among {} people", config.people.len());
    count_people(&config.people, config)
}

/// Parse `values` for the given property and count the matches.
///
/// `palindrome-id` with no values falls back to the configured people.
pub fn count_values(
    kind: PropertyKind,
    values: &[String],
    config: &TallyConfig
) -> TallyResult<CountReport> {
    info!("Counting {} values with property {}", values.len(), kind);
    let (total, matching) = match kind {
        PropertyKind::Odd => {
            let numbers = parse_integers(values)?;
            (numbers.len(), count_elements_with_property(&numbers, &OddProperty))
        }
        PropertyKind::Prime => {
            let numbers = parse_integers(values)?;
            (numbers.len(), count_elements_with_property(&numbers, &PrimeProperty))
        }
        PropertyKind::Palindrome => {
            (values.len(), count_elements_with_property(values, &PalindromeProperty))
        }
        PropertyKind::PalindromeId => {
            if values.is_empty() {
                (config.people.len(), count_people(&config.people, config)?)
            } else {
                let people = parse_people(values)?;
                (people.len(), count_people(&people, config)?)
            }
        }
    };

    Ok(CountReport::new(kind, total, matching))
}

fn count_people(people: &[Person], config: &TallyConfig) -> TallyResult<usize> {
    check_identifiers(people, config.negative_ids)?;
    Ok(count_elements_with_property(people, &PalindromeIdProperty))
}
