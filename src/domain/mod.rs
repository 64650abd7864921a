//! Domain layer: event records, categories, and the event repository.
//!
//! This module contains the server-side domain model: the type-safe event
//! identifier, the fixed category enumeration, the event record with its
//! insert and patch forms, and the in-memory repository that owns them.

pub mod event;
pub mod event_category;
pub mod event_id;
pub mod event_repository;

pub use event::{Event, EventPatch, NewEvent};
pub use event_category::EventCategory;
pub use event_id::EventId;
pub use event_repository::EventRepository;
