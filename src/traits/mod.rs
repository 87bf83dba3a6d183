pub mod property;

// Re-export traits
pub use property::Property;
