//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the immutable config, the backend client, and the in-flight form
//! registry. Per-user state (session token, language) lives in cookies and
//! is read per request.

use std::sync::Arc;

use crate::backend::Backend;
use crate::config::AppConfig;
use crate::forms::in_flight::InFlight;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub backend: Arc<dyn Backend>,
    pub in_flight: InFlight,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig, backend: Arc<dyn Backend>) -> Self {
        Self { config: Arc::new(config), backend, in_flight: InFlight::new() }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
