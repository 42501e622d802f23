use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Coach error: {0}")]
    Remote(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e.to_string())
    }
}
