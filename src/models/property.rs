use std::fmt;
use std::str::FromStr;

use crate::errors::TallyError;

/// The built-in properties that can be selected by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Odd,          // Integer is not divisible by two
    Prime,        // Integer has exactly two divisors
    Palindrome,   // String reads the same both ways
    PalindromeId, // Person's identifier reads the same both ways
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 4] = [
        PropertyKind::Odd,
        PropertyKind::Prime,
        PropertyKind::Palindrome,
        PropertyKind::PalindromeId,
    ];

    /// Name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            PropertyKind::Odd => "odd",
            PropertyKind::Prime => "prime",
            PropertyKind::Palindrome => "palindrome",
            PropertyKind::PalindromeId => "palindrome-id",
        }
    }

    /// Type of element the property applies to
    pub fn element_type(&self) -> &'static str {
        match self {
            PropertyKind::Odd | PropertyKind::Prime => "integer",
            PropertyKind::Palindrome => "string",
            PropertyKind::PalindromeId => "person (name:id)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PropertyKind::Odd => "The number is odd",
            PropertyKind::Prime => "The number is prime",
            PropertyKind::Palindrome => "The string reads the same forwards and backwards",
            PropertyKind::PalindromeId =>
                "The person's identifier reads the same forwards and backwards",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PropertyKind {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "odd" => Ok(PropertyKind::Odd),
            "prime" => Ok(PropertyKind::Prime),
            "palindrome" => Ok(PropertyKind::Palindrome),
            "palindrome-id" | "palindrome_id" | "palindromeid" => Ok(PropertyKind::PalindromeId),
            _ => Err(TallyError::UnknownProperty(s.to_string())),
        }
    }
}
