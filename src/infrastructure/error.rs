// src/infrastructure/error.rs
use crate::domain::error::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("File system error: {0}")]
    FileSystem(String),

    #[error("Invalid store key: {0}")]
    InvalidKey(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Serialization(msg) => DomainError::SerializationError(msg),
            InfrastructureError::FileSystem(msg) => DomainError::RepositoryError(msg),
            InfrastructureError::InvalidKey(msg) => DomainError::RepositoryError(msg),
            InfrastructureError::Repository(msg) => DomainError::RepositoryError(msg),
        }
    }
}

impl From<std::io::Error> for InfrastructureError {
    fn from(error: std::io::Error) -> Self {
        InfrastructureError::FileSystem(error.to_string())
    }
}

pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
