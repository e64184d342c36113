//! Agora Dashboard
//!
//! Orchestration layer: wires the REST gateway, collection synchronizer,
//! debounced search and derived view into one dashboard session. The visual
//! component tree (cards, forms, dialogs, skeletons) consumes this surface
//! and never touches the store or the HTTP client directly.

pub mod session;

pub use session::{DEFAULT_SEARCH_DELAY, DashboardSession, SessionConfig};
