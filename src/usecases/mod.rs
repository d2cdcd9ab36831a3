//! Use Cases Layer - Application Operations
//!
//! `EthosStore` is the single entry point the UI layer calls. Its
//! operations are split by concern across files, all as inherent
//! methods on the same type:
//! - `store`: raw item access, models, datasets, reports, stats, clear
//! - `community`: posts, votes, deletion
//! - `profile`: profile defaults, merge updates, stat increments
//! - `demo`: demo data loader

pub mod community;
pub mod demo;
pub mod profile;
pub mod store;

pub use store::{EthosStore, StorageKey};
