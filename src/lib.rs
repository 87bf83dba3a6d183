pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod counting;
pub mod implementations;
pub mod input;
pub mod runner;
#[cfg(test)]
mod tests;

// Re-export core components
pub use config::{ NegativeIdPolicy, TallyConfig };
pub use counting::count_elements_with_property;
pub use errors::{ TallyError, TallyResult };
pub use implementations::{
    OddProperty,
    PalindromeIdProperty,
    PalindromeProperty,
    PrimeProperty,
};
pub use models::{ CountReport, Person, PropertyKind };
pub use runner::{ count_values, run_sample };
pub use traits::Property;
