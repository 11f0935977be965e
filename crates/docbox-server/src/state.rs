//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use docbox_site::Library;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Cached document library.
    pub(crate) library: Arc<Library>,
}
