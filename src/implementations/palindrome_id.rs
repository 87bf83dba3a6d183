use log::warn;

use crate::config::NegativeIdPolicy;
use crate::errors::{ TallyError, TallyResult };
use crate::models::person::Person;
use crate::traits::property::Property;

/// Matches people whose identifier is a decimal palindrome.
///
/// Negative identifiers never match: the digit reversal only runs while the
/// value is positive, so it yields 0, which never equals a negative id. Use
/// [`check_identifiers`] to reject them up front instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct PalindromeIdProperty;

impl Property<Person> for PalindromeIdProperty {
    fn has_property(&self, person: &Person) -> bool {
        let original = person.id();
        reverse_digits(original) == Some(original)
    }
}

/// Reverses the decimal digits of a positive number.
///
/// Returns `Some(0)` for zero and negative input, and `None` when the
/// reversal does not fit in an `i64`.
pub fn reverse_digits(value: i64) -> Option<i64> {
    let mut remaining = value;
    let mut reversed: i64 = 0;
    while remaining > 0 {
        reversed = reversed.checked_mul(10)?.checked_add(remaining % 10)?;
        remaining /= 10;
    }
    Some(reversed)
}

/// Applies the negative identifier policy to a group of people.
pub fn check_identifiers(people: &[Person], policy: NegativeIdPolicy) -> TallyResult<()> {
    if policy == NegativeIdPolicy::Preserve {
        return Ok(());
    }

    match people.iter().find(|person| person.id() < 0) {
        Some(person) => {
            warn!("Rejecting negative identifier for {}", person);
            Err(TallyError::NegativeIdentifier {
                name: person.name().to_string(),
                id: person.id(),
            })
        }
        None => Ok(()),
    }
}
