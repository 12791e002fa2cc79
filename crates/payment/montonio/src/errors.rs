use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MontonioError {
    #[error("Secret key must have a value")]
    EmptySecret,
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("Unknown environment: {0}")]
    InvalidEnvironment(String),
}

impl MontonioError {
    pub fn is_expired(&self) -> bool {
        matches!(self, MontonioError::Jwt(err) if matches!(err.kind(), ErrorKind::ExpiredSignature))
    }
}
