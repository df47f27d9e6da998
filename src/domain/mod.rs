// Copyright (c) 2025 - Cowboy AI, Inc.
//! Entity model of the mock provider
//!
//! # Entities
//!
//! - [`Facility`] - physical location, unique by code
//! - [`Plan`] - device tier, unique by slug
//! - [`Device`] - compute instance; lists its attached volumes
//! - [`Volume`] - block storage; lists its attachments
//! - [`Attachment`] - one device-volume binding
//! - [`BgpConfig`] - optional per-project BGP settings
//!
//! Relations between entities are stored as id lists and resolved through
//! the store at read time; no entity holds a live reference to another.

pub mod attachment;
pub mod bgp;
pub mod device;
pub mod facility;
pub mod ids;
pub mod volume;

pub use attachment::{Attachment, TransportInfo};
pub use bgp::{BgpConfig, DeploymentType, EnableBgpRequest};
pub use device::{Device, DeviceCreateRequest, DeviceUpdate, ResourceState};
pub use facility::{Facility, Plan, DEFAULT_FACILITY_ID};
pub use ids::{
    AttachmentId, BgpConfigId, DeviceId, EntityKind, FacilityId, PlanId, ProjectId, VolumeId,
};
pub use volume::{volume_id_to_name, Volume, VolumeCreateRequest, VolumeSnapshot};
