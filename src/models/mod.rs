pub mod person;
pub mod property;
pub mod report;

// Re-export common model types
pub use person::Person;
pub use property::PropertyKind;
pub use report::CountReport;
