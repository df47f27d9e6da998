// Copyright (c) 2025 - Cowboy AI, Inc.
//! Data Store Abstraction
//!
//! This module defines the contract the HTTP layer and the metadata
//! projector use to read and mutate the entity graph, and the in-memory
//! implementation of it.
//!
//! # Architecture
//!
//! ```text
//! HTTP handler → SharedStore (one exclusive lock)
//!                     ↓
//!                 DataStore ── create/get/list/delete per entity kind
//!                     │
//!                     ├── relations: attach / detach / delete cascades
//!                     ├── pagination: sorted listing → slice
//!                     └── MetadataProjector (read side)
//! ```
//!
//! # Store Requirements
//!
//! 1. **Absence is not an error**: unknown ids yield `None` / `false`
//! 2. **All-or-nothing**: a failed mutation leaves no partial change behind
//! 3. **Consistent relations**: a volume's attachment list and a device's
//!    volume list never point at an attachment that no longer exists
//! 4. **Deterministic listings**: ordered by the lexical order of ids
//!
//! # Example
//!
//! ```rust
//! use packet_api_server::domain::{DeviceCreateRequest, ProjectId, VolumeCreateRequest};
//! use packet_api_server::store::{DataStore, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! let project = ProjectId::from("p1");
//! let facility = store.create_facility("F1", "f1").unwrap();
//! let device = store
//!     .create_device(&project, DeviceCreateRequest::new("d1", facility.id))
//!     .unwrap();
//! let volume = store.create_volume(&project, VolumeCreateRequest::with_size(10));
//!
//! let attachment = store.attach_volume(&volume.id, &device.id).unwrap();
//! assert!(store.detach_volume(&attachment.id));
//! ```

use crate::domain::{
    Attachment, AttachmentId, BgpConfig, Device, DeviceCreateRequest, DeviceId, DeviceUpdate,
    EnableBgpRequest, Facility, FacilityId, Plan, PlanId, ProjectId, TransportInfo, Volume,
    VolumeCreateRequest, VolumeId,
};
use crate::errors::StoreResult;
use crate::pagination::ListOptions;

pub mod memory;
mod relations;
pub mod shared;

pub use memory::MemoryStore;
pub use shared::SharedStore;

/// Store of facilities, plans, devices, volumes, attachments and BGP configs
///
/// Every method returns owned copies so callers never hold a borrow into
/// the graph across a lock boundary.
pub trait DataStore {
    /// Create a facility; its code must not already be in use
    fn create_facility(&mut self, name: &str, code: &str) -> StoreResult<Facility>;

    /// All facilities, or the single default `ewr1` facility when none exist
    fn list_facilities(&self) -> Vec<Facility>;

    fn get_facility(&self, id: &FacilityId) -> Option<Facility>;

    fn facility_by_code(&self, code: &str) -> Option<Facility>;

    /// Create a plan; its slug must not already be in use
    fn create_plan(&mut self, slug: &str, name: &str) -> StoreResult<Plan>;

    fn list_plans(&self) -> Vec<Plan>;

    fn get_plan(&self, id: &PlanId) -> Option<Plan>;

    fn plan_by_slug(&self, slug: &str) -> Option<Plan>;

    /// Create an active device in `project`
    ///
    /// Fails with a validation error when the facility is missing or either
    /// reference does not resolve.
    fn create_device(
        &mut self,
        project: &ProjectId,
        request: DeviceCreateRequest,
    ) -> StoreResult<Device>;

    /// Change a device's own fields; an unknown id is an error
    fn update_device(&mut self, id: &DeviceId, update: DeviceUpdate) -> StoreResult<Device>;

    fn list_devices(&self, project: &ProjectId, options: &ListOptions) -> Vec<Device>;

    fn get_device(&self, id: &DeviceId) -> Option<Device>;

    /// Remove a device and every attachment it holds
    fn delete_device(&mut self, id: &DeviceId) -> bool;

    fn create_volume(&mut self, project: &ProjectId, request: VolumeCreateRequest) -> Volume;

    fn list_volumes(&self, project: &ProjectId, options: &ListOptions) -> Vec<Volume>;

    fn get_volume(&self, id: &VolumeId) -> Option<Volume>;

    /// Remove a volume and every attachment of it
    fn delete_volume(&mut self, id: &VolumeId) -> bool;

    /// Bind a volume to a device; `None` when either does not exist
    fn attach_volume(&mut self, volume_id: &VolumeId, device_id: &DeviceId)
        -> Option<Attachment>;

    /// Remove a binding and both back-references; `false` when unknown
    fn detach_volume(&mut self, attachment_id: &AttachmentId) -> bool;

    fn get_attachment(&self, id: &AttachmentId) -> Option<Attachment>;

    /// Target identifier and portals a device uses to reach an attachment
    fn attachment_transport(&self, id: &AttachmentId) -> Option<TransportInfo>;

    /// Enable BGP for a project; a second enable is a conflict
    fn enable_bgp(&mut self, project: &ProjectId, request: EnableBgpRequest)
        -> StoreResult<BgpConfig>;

    fn get_bgp_config(&self, project: &ProjectId) -> Option<BgpConfig>;
}
