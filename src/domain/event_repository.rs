//! In-memory event storage with a sequential id counter.
//!
//! [`EventRepository`] keeps every event in a `BTreeMap` keyed by
//! [`EventId`] behind a single [`tokio::sync::RwLock`]. Each operation takes
//! the lock once, so every read or mutation is one atomic step. Iteration
//! follows ascending id order, which makes "first match" queries such as
//! [`EventRepository::featured`] deterministic.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::event::{Event, EventPatch, NewEvent};
use super::{EventCategory, EventId};
use crate::error::CatalogError;

/// Map contents plus the next identifier to hand out.
#[derive(Debug)]
struct Store {
    events: BTreeMap<EventId, Event>,
    next_id: Option<EventId>,
}

impl Store {
    fn empty() -> Self {
        Self {
            events: BTreeMap::new(),
            next_id: Some(EventId::FIRST),
        }
    }

    fn insert(&mut self, new: NewEvent) -> Result<Event, CatalogError> {
        let id = self
            .next_id
            .ok_or_else(|| CatalogError::Internal("event id space exhausted".to_string()))?;
        self.next_id = id.next();
        let event = Event::from_new(id, new);
        self.events.insert(id, event.clone());
        Ok(event)
    }
}

/// Authoritative set of event records for the lifetime of the process.
///
/// The repository assumes well-formed input: validation happens at the API
/// boundary before any method here is called.
#[derive(Debug)]
pub struct EventRepository {
    store: RwLock<Store>,
}

impl EventRepository {
    /// Creates an empty repository whose first event will get id `1`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::empty()),
        }
    }

    /// Creates a repository pre-loaded with `events`, assigning fresh
    /// sequential ids in iteration order.
    ///
    /// Records beyond the identifier space are dropped with a warning.
    #[must_use]
    pub fn with_events(events: impl IntoIterator<Item = NewEvent>) -> Self {
        let mut store = Store::empty();
        for new in events {
            if let Err(err) = store.insert(new) {
                tracing::warn!(error = %err, "dropping seed event");
                break;
            }
        }
        Self {
            store: RwLock::new(store),
        }
    }

    /// Returns every event in ascending id order.
    pub async fn list(&self) -> Vec<Event> {
        self.store.read().await.events.values().cloned().collect()
    }

    /// Returns the event with the given id, if any.
    pub async fn get(&self, id: EventId) -> Option<Event> {
        self.store.read().await.events.get(&id).cloned()
    }

    /// Returns the lowest-id event carrying the featured flag, if any.
    pub async fn featured(&self) -> Option<Event> {
        self.store
            .read()
            .await
            .events
            .values()
            .find(|event| event.is_featured())
            .cloned()
    }

    /// Returns every event in `category`, in ascending id order.
    pub async fn by_category(&self, category: EventCategory) -> Vec<Event> {
        self.store
            .read()
            .await
            .events
            .values()
            .filter(|event| event.category == category)
            .cloned()
            .collect()
    }

    /// Returns events dated at or after the current wall-clock time,
    /// soonest first, truncated to `limit` when given.
    pub async fn upcoming(&self, limit: Option<usize>) -> Vec<Event> {
        self.upcoming_at(Utc::now(), limit).await
    }

    /// Same as [`Self::upcoming`] with an explicit reference instant.
    ///
    /// Events sharing a date keep ascending id order.
    pub async fn upcoming_at(&self, now: DateTime<Utc>, limit: Option<usize>) -> Vec<Event> {
        let mut upcoming: Vec<Event> = self
            .store
            .read()
            .await
            .events
            .values()
            .filter(|event| event.date >= now)
            .cloned()
            .collect();
        upcoming.sort_by_key(|event| event.date);
        if let Some(limit) = limit {
            upcoming.truncate(limit);
        }
        upcoming
    }

    /// Stores a new event under the next sequential id and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Internal`] once the `u32` identifier space
    /// is exhausted.
    pub async fn create(&self, new: NewEvent) -> Result<Event, CatalogError> {
        self.store.write().await.insert(new)
    }

    /// Merges `patch` into the event with the given id and returns the
    /// updated record, or `None` if no such event exists.
    pub async fn update(&self, id: EventId, patch: EventPatch) -> Option<Event> {
        let mut store = self.store.write().await;
        let event = store.events.get_mut(&id)?;
        event.apply(patch);
        Some(event.clone())
    }

    /// Removes the event with the given id. Returns `true` if a record was
    /// actually removed.
    pub async fn delete(&self, id: EventId) -> bool {
        self.store.write().await.events.remove(&id).is_some()
    }

    /// Returns the number of stored events.
    pub async fn len(&self) -> usize {
        self.store.read().await.events.len()
    }

    /// Returns `true` if the repository holds no events.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.events.is_empty()
    }
}

impl Default for EventRepository {
    fn default() -> Self {
        Self::new()
    }
}
