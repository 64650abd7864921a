//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::EventRepository;
use crate::service::EventService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Event service for all business logic.
    pub event_service: Arc<EventService>,
}

impl AppState {
    /// Wires a service around an already-built repository.
    #[must_use]
    pub fn new(repository: EventRepository) -> Self {
        Self {
            event_service: Arc::new(EventService::new(Arc::new(repository))),
        }
    }
}
