//! Service layer: business logic orchestration.
//!
//! [`EventService`] coordinates event operations on top of the
//! [`super::domain::EventRepository`].

pub mod event_service;

pub use event_service::EventService;
