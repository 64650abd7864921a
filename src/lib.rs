//! # event-catalog
//!
//! REST backend for a promotional event-listing site: a browsable catalog
//! of performances, healing sessions and workshops.
//!
//! Events are held in memory for the lifetime of the process. The store is
//! seeded once at startup from a JSON file; later mutations are not
//! persisted.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── EventService (service/)
//!     │
//!     ├── EventRepository (domain/)
//!     │
//!     └── Seed file (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
