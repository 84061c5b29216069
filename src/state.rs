//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AllocationService, ResolutionService};
use crate::domain::repositories::LinkRepository;

#[derive(Clone)]
pub struct AppState {
    pub allocation_service: Arc<AllocationService>,
    pub resolution_service: Arc<ResolutionService>,
    /// Public base URL used to render short URLs in responses.
    pub base_url: String,
    /// Name of the active store backend, reported by the health endpoint.
    pub backend: &'static str,
}

impl AppState {
    /// Wires both services onto a single shared repository.
    pub fn new(repository: Arc<dyn LinkRepository>, base_url: String, backend: &'static str) -> Self {
        Self {
            allocation_service: Arc::new(AllocationService::new(repository.clone())),
            resolution_service: Arc::new(ResolutionService::new(repository)),
            base_url,
            backend,
        }
    }
}
