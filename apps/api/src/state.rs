use std::sync::Arc;

use crate::chat::resolver::ResponseResolver;
use crate::chat::session::SessionStore;
use crate::profile::PortfolioProfile;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only fact store. Never mutated after startup.
    pub profile: Arc<PortfolioProfile>,
    pub resolver: Arc<ResponseResolver>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(
        profile: Arc<PortfolioProfile>,
        resolver: ResponseResolver,
        sessions: SessionStore,
    ) -> Self {
        Self {
            profile,
            resolver: Arc::new(resolver),
            sessions,
        }
    }
}
