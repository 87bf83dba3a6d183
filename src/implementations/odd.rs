use crate::traits::property::Property;

/// Matches integers that are not divisible by two.
///
/// Uses truncating remainder, so negative odd numbers match as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct OddProperty;

impl Property<i64> for OddProperty {
    fn has_property(&self, element: &i64) -> bool {
        element % 2 != 0
    }
}
