use crate::errors::{ TallyError, TallyResult };
use crate::models::person::Person;

/// Parse command-line values as integers
pub fn parse_integers(values: &[String]) -> TallyResult<Vec<i64>> {
    values
        .iter()
        .map(|value| {
            value
                .trim()
                .parse::<i64>()
                .map_err(|e| TallyError::InvalidInput(format!("'{}' is not an integer: {}", value, e)))
        })
        .collect()
}

/// Parse a `name:id` pair into a person.
///
/// The split happens at the last colon, so names may contain colons.
pub fn parse_person(value: &str) -> TallyResult<Person> {
    let (name, id) = value
        .rsplit_once(':')
        .ok_or_else(|| TallyError::InvalidInput(format!("'{}' is not of the form name:id", value)))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(TallyError::InvalidInput(format!("'{}' has an empty name", value)));
    }

    let id = id
        .trim()
        .parse::<i64>()
        .map_err(|e| TallyError::InvalidInput(format!("'{}' has an invalid id: {}", value, e)))?;

    Ok(Person::new(name, id))
}

pub fn parse_people(values: &[String]) -> TallyResult<Vec<Person>> {
    values.iter().map(|value| parse_person(value)).collect()
}
