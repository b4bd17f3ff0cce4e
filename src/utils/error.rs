use thiserror::Error;

#[derive(Error, Debug)]
pub enum JokeApiError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No jokes available")]
    NoJokesAvailable,

    #[error("Joke provider failed: {message}")]
    ProviderError { message: String },
}

impl JokeApiError {
    pub fn provider(message: impl Into<String>) -> Self {
        JokeApiError::ProviderError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, JokeApiError>;
