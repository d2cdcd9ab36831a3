//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `KeyValueStore`: durable JSON blob storage keyed by string

pub mod key_value;

pub use key_value::{KeyValueStore, StoreError};
