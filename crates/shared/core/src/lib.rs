//! Agora Core Domain
//!
//! Pure domain types for the Agora catalog dashboard.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Product, ProductDraft, ProductId, ProductPatch};
pub use error::ValidationError;
pub use values::Price;
