//! Application state for the web layer.

use std::sync::Arc;

use crate::service::OpeningHours;

/// Shared application state.
///
/// The opening-hours configuration is immutable, so every request
/// evaluates against the same snapshot.
#[derive(Clone)]
pub struct AppState {
    /// Validated opening-hours configuration
    pub hours: Arc<OpeningHours>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(hours: OpeningHours) -> Self {
        Self {
            hours: Arc::new(hours),
        }
    }
}
