// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Failed to serialize: {0}")]
    SerializationError(String),

    #[error("Failed to deserialize: {0}")]
    DeserializationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        match self {
            DomainError::RepositoryError(msg) => {
                DomainError::RepositoryError(format!("{}: {}", context.into(), msg))
            }
            DomainError::SerializationError(msg) => {
                DomainError::SerializationError(format!("{}: {}", context.into(), msg))
            }
            DomainError::DeserializationError(msg) => {
                DomainError::DeserializationError(format!("{}: {}", context.into(), msg))
            }
            DomainError::Other(msg) => DomainError::Other(format!("{}: {}", context.into(), msg)),
            err => DomainError::Other(format!("{}: {}", context.into(), err)),
        }
    }
}
