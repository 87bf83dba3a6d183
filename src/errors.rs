use thiserror::Error;

/// Error types for the tally library and CLI
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    #[error("Negative identifier {id} for person {name}")]
    NegativeIdentifier { name: String, id: i64 },

    #[error("Failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type specific to tally operations
pub type TallyResult<T> = Result<T, TallyError>;
