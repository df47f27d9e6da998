//! In-memory stand-in for the Packet bare-metal management API
//!
//! This crate provides the entity store behind a mock provider API:
//! facilities, plans, devices, volumes and their attachments, the
//! relationship bookkeeping between them, deterministic listing pagination
//! and the device metadata projection, plus a thin HTTP layer over it.

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod pagination;
pub mod projection;
pub mod store;

// Re-export commonly used types
pub use config::ServerConfig;
pub use errors::{ConfigError, StoreError, StoreResult};
pub use store::{DataStore, MemoryStore, SharedStore};
