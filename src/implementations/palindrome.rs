use crate::traits::property::Property;

/// Matches strings that read the same forwards and backwards.
///
/// Comparison is per `char`, so multi-byte characters are compared whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct PalindromeProperty;

impl Property<str> for PalindromeProperty {
    fn has_property(&self, element: &str) -> bool {
        let chars: Vec<char> = element.chars().collect();
        let length = chars.len();
        (0..length / 2).all(|i| chars[i] == chars[length - i - 1])
    }
}

impl Property<String> for PalindromeProperty {
    fn has_property(&self, element: &String) -> bool {
        <Self as Property<str>>::has_property(self, element.as_str())
    }
}
