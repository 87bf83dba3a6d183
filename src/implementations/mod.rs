pub mod odd;
pub mod prime;
pub mod palindrome;
pub mod palindrome_id;

pub use odd::OddProperty;
pub use prime::PrimeProperty;
pub use palindrome::PalindromeProperty;
pub use palindrome_id::{ check_identifiers, reverse_digits, PalindromeIdProperty };
