use crate::traits::property::Property;

/// Matches prime integers by trial division.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimeProperty;

impl Property<i64> for PrimeProperty {
    fn has_property(&self, element: &i64) -> bool {
        let n = *element;
        if n < 2 {
            return false;
        }

        // `i <= n / i` is `i * i <= n` without the overflow
        let mut i = 2;
        while i <= n / i {
            if n % i == 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}
