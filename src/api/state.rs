//! Application state for the API server

use crate::config::Config;
use crate::service::DirectorService;
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// This struct is cloned for each request (cheap Arc clone) and provides
/// access to the director service and configuration.
#[derive(Clone)]
pub struct AppState {
    /// The director lookup service
    pub service: Arc<DirectorService>,

    /// Configuration (read access for handlers)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service: Arc<DirectorService>, config: Arc<Config>) -> Self {
        Self { service, config }
    }
}
