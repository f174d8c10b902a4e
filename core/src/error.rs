use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid config field '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Unparseable timestamp in store: {value}")]
    Timestamp { value: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SeedResult<T> = Result<T, SeedError>;
