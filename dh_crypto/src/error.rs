use thiserror::Error;

pub type Result<T> = std::result::Result<T, DhError>;

#[derive(Debug, Error)]
pub enum DhError {
    #[error("invalid group parameters: {0}")]
    InvalidParameters(&'static str),

    #[error("failed to parse group parameter: {0}")]
    ParseError(String),

    #[error("entropy source failure: {0}")]
    Entropy(#[from] rand::Error),

    #[error("entropy source produced only zero values after {attempts} draws")]
    EntropyExhausted { attempts: usize },

    #[error("random draw length must be at least one byte")]
    InvalidByteLength,

    #[error("private exponent must be non-zero")]
    InvalidPrivateExponent,

    #[error("peer public value is outside [2, p-2]")]
    InvalidPeerValue,
}
