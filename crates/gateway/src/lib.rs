//! Agora Gateway
//!
//! Infrastructure layer for the Agora catalog dashboard. Provides:
//! - REST adapter for the remote catalog service (reqwest)
//! - Gateway configuration (base endpoint)
//!
//! The adapter implements the `CatalogApi` port from agora-ports, so the
//! synchronization core never sees HTTP types.

pub mod config;
pub mod error;
pub mod rest;

// Re-export commonly used types
pub use config::{ConfigError, GatewayConfig};
pub use error::RestError;
pub use rest::RestCatalogClient;
