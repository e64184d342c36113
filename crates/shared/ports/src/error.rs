use thiserror::Error;

use agora_core::ValidationError;

/// Domain-level errors for catalog operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Transport failure, no response received
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status
    #[error("Server error: HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// A 2xx body that could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Rejected before reaching the network
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
