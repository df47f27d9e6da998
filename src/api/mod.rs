// Copyright (c) 2025 - Cowboy AI, Inc.
//! HTTP dispatch table
//!
//! A thin, stateless mapping from method + path onto store operations.
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | GET | `/facilities` | list facilities |
//! | GET | `/projects/:project_id/storage` | list volumes (`page`, `per_page`) |
//! | POST | `/projects/:project_id/storage` | create volume |
//! | GET | `/storage/:volume_id` | get volume |
//! | DELETE | `/storage/:volume_id` | delete volume |
//! | POST | `/storage/:volume_id/attachments` | attach volume (`{"device_id"}`) |
//! | DELETE | `/storage/attachments/:attachment_id` | detach volume |
//! | GET | `/projects/:project_id/devices` | list devices (`page`, `per_page`) |
//! | GET | `/devices/:device_id` | get device |
//! | GET | `/metadata` | metadata of the configured device |
//! | POST | `/projects/:project_id/bgp-configs` | enable BGP |
//! | GET | `/projects/:project_id/bgp-config` | get BGP config |

use axum::routing::{delete, get, post};
use axum::Router;

use crate::config::ServerConfig;
use crate::projection::MetadataProjector;
use crate::store::{MemoryStore, SharedStore};

pub mod error;
mod handlers;
pub mod resources;

pub use error::{ApiError, ErrorBody};

/// State shared by every handler
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: SharedStore,
    pub metadata: MetadataProjector,
}

impl AppState {
    pub fn new(store: SharedStore, metadata: MetadataProjector) -> Self {
        Self { store, metadata }
    }

    /// Fresh in-memory store wired up as `config` describes
    pub fn from_config(config: &ServerConfig) -> Self {
        let store = MemoryStore::new().with_transport(config.transport.clone());
        Self::new(
            SharedStore::new(store),
            MetadataProjector::new(config.metadata_device),
        )
    }
}

/// Build the router serving every route of the mock API
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/facilities", get(handlers::list_facilities))
        .route(
            "/projects/:project_id/storage",
            get(handlers::list_volumes).post(handlers::create_volume),
        )
        .route(
            "/storage/:volume_id",
            get(handlers::get_volume).delete(handlers::delete_volume),
        )
        .route(
            "/storage/:volume_id/attachments",
            post(handlers::attach_volume),
        )
        .route(
            "/storage/attachments/:attachment_id",
            delete(handlers::detach_volume),
        )
        .route("/projects/:project_id/devices", get(handlers::list_devices))
        .route("/devices/:device_id", get(handlers::get_device))
        .route("/metadata", get(handlers::metadata))
        .route(
            "/projects/:project_id/bgp-configs",
            post(handlers::enable_bgp),
        )
        .route(
            "/projects/:project_id/bgp-config",
            get(handlers::get_bgp_config),
        )
        .with_state(state)
}
