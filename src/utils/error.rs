use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("API returned unexpected status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid permit field '{field}' = '{value}': {reason}")]
    Ingest {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid configuration value '{field}' = '{value}': {reason}")]
    Config {
        field: &'static str,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, FinderError>;
