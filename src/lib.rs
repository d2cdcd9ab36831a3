//! EthosLens Store — Library Root
//!
//! Local persistence and aggregation for the EthosLens fairness-audit
//! dashboard: typed collections of models, datasets, audit reports and
//! community posts plus the user profile, stored as JSON blobs behind
//! an injected key/value backend.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;

pub use ports::key_value::{KeyValueStore, StoreError};
pub use usecases::store::{EthosStore, StorageKey};
