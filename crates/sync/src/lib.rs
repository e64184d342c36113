//! Agora Sync
//!
//! Client-side synchronization core for the catalog dashboard:
//! - Query store holding the single cached product collection
//! - Collection synchronizer (fetch + patch-on-mutation-success)
//! - Debounced search filter
//! - Pure derived view over the cached collection
//!
//! ## Data flow
//!
//! ```text
//! keystrokes         mutations (add/edit/delete)
//!     │                     │
//! ┌───▼───────┐      ┌──────▼──────┐      ┌─────────────┐
//! │ Debouncer │      │ CatalogSync │─────▶│ CatalogApi  │
//! └───┬───────┘      └──────┬──────┘      │  (gateway)  │
//!     │ stabilized          │ patches     └─────────────┘
//!     │ term                ▼
//!     │              ┌────────────┐
//!     └─────────────▶│ QueryStore │──▶ derive_view ──▶ grid
//!                    └────────────┘
//! ```
//!
//! Cache patches run only in the completion path of their network call, so
//! interleaved mutations land in the order their responses arrive.

pub mod debounce;
pub mod patch;
pub mod store;
pub mod synchronizer;
pub mod view;

// Re-export commonly used types
pub use debounce::Debouncer;
pub use patch::{append_item, remove_by_id, replace_by_id};
pub use store::{CollectionEntry, PRODUCTS_KEY, QueryStatus, QueryStore};
pub use synchronizer::CatalogSync;
pub use view::derive_view;
