//! Domain layer - Record types, fixtures and aggregation.
//!
//! Pure data and pure functions: nothing here reads or writes storage
//! (hexagonal architecture inner ring). All types serialize to the
//! JSON shapes the dashboard persists.

pub mod catalog;
pub mod community;
pub mod fixtures;
pub mod profile;
pub mod report;
pub mod stats;

// Re-export core types for convenience
pub use catalog::{Dataset, Model, ModelStatus};
pub use community::{Badge, CommunityPost, VoteType};
pub use profile::{ProfileStat, ProfileStats, ProfileUpdate, UserProfile};
pub use report::{AuditReport, BiasMetric};
pub use stats::StoreStats;
