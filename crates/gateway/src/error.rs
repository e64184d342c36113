//! Error types for the gateway crate

use thiserror::Error;

use agora_ports::CatalogError;

/// Infrastructure-level errors for the REST catalog client
#[derive(Error, Debug)]
pub enum RestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Convert infrastructure RestError to the domain error taxonomy
impl From<RestError> for CatalogError {
    fn from(err: RestError) -> Self {
        match err {
            RestError::Http(e) => CatalogError::Network(e.to_string()),
            RestError::Status { status, body } => CatalogError::Server {
                status,
                message: body,
            },
            RestError::Decode(msg) => CatalogError::Decode(msg),
        }
    }
}
