//! Event service: orchestrates repository operations.

use std::sync::Arc;

use crate::domain::{Event, EventCategory, EventId, EventPatch, EventRepository, NewEvent};
use crate::error::CatalogError;

/// Orchestration layer for all event operations.
///
/// Stateless coordinator over a shared [`EventRepository`]. Turns absent
/// results into typed [`CatalogError`]s and logs every mutation. Inputs are
/// expected to be validated already.
#[derive(Debug, Clone)]
pub struct EventService {
    repository: Arc<EventRepository>,
}

impl EventService {
    /// Creates a new `EventService`.
    #[must_use]
    pub fn new(repository: Arc<EventRepository>) -> Self {
        Self { repository }
    }

    /// Returns a reference to the inner [`EventRepository`].
    #[must_use]
    pub fn repository(&self) -> &Arc<EventRepository> {
        &self.repository
    }

    /// Returns every event.
    pub async fn list_events(&self) -> Vec<Event> {
        self.repository.list().await
    }

    /// Returns a single event.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EventNotFound`] if no event has this id.
    pub async fn get_event(&self, id: EventId) -> Result<Event, CatalogError> {
        self.repository
            .get(id)
            .await
            .ok_or(CatalogError::EventNotFound(id))
    }

    /// Returns the featured event.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NoFeaturedEvent`] if no event is flagged.
    pub async fn featured_event(&self) -> Result<Event, CatalogError> {
        self.repository
            .featured()
            .await
            .ok_or(CatalogError::NoFeaturedEvent)
    }

    /// Returns all events in `category`.
    pub async fn events_by_category(&self, category: EventCategory) -> Vec<Event> {
        self.repository.by_category(category).await
    }

    /// Returns upcoming events, soonest first, capped at `limit`.
    pub async fn upcoming_events(&self, limit: Option<usize>) -> Vec<Event> {
        self.repository.upcoming(limit).await
    }

    /// Stores a new event.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Internal`] if no identifier can be assigned.
    pub async fn create_event(&self, new: NewEvent) -> Result<Event, CatalogError> {
        let event = self.repository.create(new).await?;
        tracing::info!(event_id = %event.id, category = %event.category, "event created");
        Ok(event)
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EventNotFound`] if no event has this id.
    pub async fn update_event(&self, id: EventId, patch: EventPatch) -> Result<Event, CatalogError> {
        if patch.is_empty() {
            tracing::debug!(event_id = %id, "empty patch");
        }
        let event = self
            .repository
            .update(id, patch)
            .await
            .ok_or(CatalogError::EventNotFound(id))?;
        tracing::info!(event_id = %id, "event updated");
        Ok(event)
    }

    /// Deletes an event.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EventNotFound`] if no event has this id.
    pub async fn delete_event(&self, id: EventId) -> Result<(), CatalogError> {
        if !self.repository.delete(id).await {
            return Err(CatalogError::EventNotFound(id));
        }
        tracing::info!(event_id = %id, "event deleted");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::event::FEATURED;
    use crate::domain::event::fixtures::new_event;

    fn make_service(events: Vec<NewEvent>) -> EventService {
        EventService::new(Arc::new(EventRepository::with_events(events)))
    }

    #[tokio::test]
    async fn get_event_maps_absent_to_not_found() {
        let service = make_service(vec![]);
        let result = service.get_event(EventId::new(5)).await;
        assert!(matches!(result, Err(CatalogError::EventNotFound(id)) if id == EventId::new(5)));
    }

    #[tokio::test]
    async fn featured_event_requires_a_flag() {
        let now = Utc::now();
        let service = make_service(vec![new_event("Plain", EventCategory::Healing, now)]);
        assert!(matches!(
            service.featured_event().await,
            Err(CatalogError::NoFeaturedEvent)
        ));

        let patch = EventPatch {
            is_featured: Some(FEATURED),
            ..EventPatch::default()
        };
        let Ok(updated) = service.update_event(EventId::FIRST, patch).await else {
            panic!("update failed");
        };
        let Ok(featured) = service.featured_event().await else {
            panic!("expected featured event");
        };
        assert_eq!(featured, updated);
    }

    #[tokio::test]
    async fn create_then_get_round_trips_through_repository() {
        let service = make_service(vec![]);
        let future = Utc::now() + Duration::days(7);
        let Ok(created) = service
            .create_event(new_event("Sound Bath", EventCategory::Healing, future))
            .await
        else {
            panic!("create failed");
        };
        let Ok(fetched) = service.get_event(created.id).await else {
            panic!("get failed");
        };
        assert_eq!(created, fetched);
        assert_eq!(service.upcoming_events(None).await, vec![created]);
    }

    #[tokio::test]
    async fn update_and_delete_unknown_ids_fail() {
        let service = make_service(vec![]);
        assert!(
            service
                .update_event(EventId::new(3), EventPatch::default())
                .await
                .is_err()
        );
        assert!(service.delete_event(EventId::new(3)).await.is_err());
    }

    #[tokio::test]
    async fn delete_removes_event() {
        let service = make_service(vec![new_event("Gone", EventCategory::Workshop, Utc::now())]);
        assert!(service.delete_event(EventId::FIRST).await.is_ok());
        assert!(service.list_events().await.is_empty());
        assert!(service.get_event(EventId::FIRST).await.is_err());
    }
}
