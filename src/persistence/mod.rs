//! Persistence layer: the static seed file read once at startup.
//!
//! There is no durable storage. Mutations live in memory only and are
//! lost on restart.

pub mod seed_file;

pub use seed_file::{load_seed_events, read_seed_file};
