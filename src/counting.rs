use log::debug;

use crate::traits::property::Property;

/// Counts the elements that have the given property.
///
/// Every element is checked exactly once and nothing is mutated. The result
/// is always within `0..=elements.len()`.
pub fn count_elements_with_property<T, P>(elements: &[T], property: &P) -> usize
where
    P: Property<T> + ?Sized,
{
    let mut count = 0;
    for element in elements {
        if property.has_property(element) {
            count += 1;
        }
    }
    debug!("{} of {} elements have the property", count, elements.len());
    count
}
