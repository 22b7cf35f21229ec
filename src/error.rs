use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatementError {
    #[error("Required line item matching '{0}' was not found in the statement")]
    MissingAnchor(String),

    #[error("Malformed statement input: {0}")]
    InvalidShape(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[cfg(feature = "gemini")]
    #[error("GEMINI_API_KEY is not set; configure it to enable AI commentary")]
    MissingApiKey,

    #[cfg(feature = "gemini")]
    #[error("Gemini API error: {0}")]
    ServiceError(String),

    #[cfg(feature = "gemini")]
    #[error("HTTP transport error: {0}")]
    TransportError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, StatementError>;
