use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoolpayError>;

#[derive(Error, Debug)]
pub enum CoolpayError {
    /// A local argument or a decoded entity failed validation.
    #[error("Validation error: {0}")]
    ValidationError(String),
    /// The login endpoint rejected the credentials.
    #[error("Authentication unsuccessful (status {status})")]
    AuthenticationError { status: u16 },
    /// No token is held, or the server answered 401.
    #[error("Unauthorized: {0}")]
    UnauthorizedError(String),
    /// Any other remote failure.
    #[error("API error (status {status}): {body}")]
    ApiError { status: u16, body: String },
    /// The response body did not match the expected schema.
    #[error("Decode error: {0}")]
    DecodeError(String),
    #[error("Transport error: {0}")]
    TransportError(String),
}

impl From<serde_json::Error> for CoolpayError {
    fn from(e: serde_json::Error) -> Self {
        Self::DecodeError(e.to_string())
    }
}

impl From<reqwest::Error> for CoolpayError {
    fn from(e: reqwest::Error) -> Self {
        Self::TransportError(e.to_string())
    }
}

/// Fails with a `ValidationError` naming `field` when `value` is empty.
pub(crate) fn require_present(value: &str, field: &str) -> Result<()> {
    if value.is_empty() {
        Err(CoolpayError::ValidationError(format!("{field} is mandatory")))
    } else {
        Ok(())
    }
}
