use crate::models::FieldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Provider error ({status}): {message}")]
    ProviderError { status: u16, message: String },
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Image provider unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Validation failed: {}", field_names(.0))]
    ValidationError(Vec<FieldError>),
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AssetError {
    /// Errors the caller caused. Their message is safe to echo back.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AssetError::InvalidRequest(_) | AssetError::ValidationError(_)
        )
    }
}

fn field_names(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, AssetError>;
