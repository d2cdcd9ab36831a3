//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! infrastructure (file I/O, in-memory maps).
//!
//! Adapter categories:
//! - `persistence`: file-per-key JSON store and in-memory store

pub mod persistence;
