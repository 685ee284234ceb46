// Types

pub type Result<VALUE = ()> = std::result::Result<VALUE, Error>;

// Error

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("hashing failed: {0}")]
    CryptoEngineFailure(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("invalid hash format, please make sure the hash is correct")]
    InvalidHashFormat,
}

impl From<bcrypt::BcryptError> for Error {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::CryptoEngineFailure(Box::new(err))
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::CryptoEngineFailure(Box::new(err))
    }
}
