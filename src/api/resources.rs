// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wire representations of store entities
//!
//! Relations are rendered as `{id, href}` links the way the real API does;
//! an entity's own `href` is the path it can be fetched from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Attachment, AttachmentId, BgpConfig, Device, DeviceId, Facility, Plan, ProjectId,
    ResourceState, Volume, VolumeId, VolumeSnapshot,
};
use crate::store::DataStore;

pub fn volume_href(id: &VolumeId) -> String {
    format!("/storage/{id}")
}

pub fn device_href(id: &DeviceId) -> String {
    format!("/devices/{id}")
}

pub fn attachment_href(id: &AttachmentId) -> String {
    format!("/storage/attachments/{id}")
}

pub fn project_href(id: &ProjectId) -> String {
    format!("/projects/{id}")
}

/// Reference to another resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub href: String,
}

impl Link {
    fn new(id: impl ToString, href: String) -> Self {
        Self {
            id: id.to_string(),
            href,
        }
    }
}

/// Reference by id only, for resources this server does not route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentLink {
    pub id: String,
    pub href: String,
    pub device: Link,
    pub volume: Link,
}

impl From<&Attachment> for AttachmentLink {
    fn from(attachment: &Attachment) -> Self {
        Self {
            id: attachment.id.to_string(),
            href: attachment_href(&attachment.id),
            device: Link::new(attachment.device_id, device_href(&attachment.device_id)),
            volume: Link::new(attachment.volume.id, volume_href(&attachment.volume.id)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeResource {
    pub id: String,
    pub name: String,
    pub description: String,
    pub size: u64,
    pub state: ResourceState,
    pub locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<Reference>,
    pub project: Link,
    pub attachments: Vec<AttachmentLink>,
    pub created_at: DateTime<Utc>,
    pub href: String,
}

impl VolumeResource {
    /// Render a volume, resolving its attachment ids through `store`
    pub fn render(volume: Volume, store: &dyn DataStore) -> Self {
        let attachments = volume
            .attachments
            .iter()
            .filter_map(|id| store.get_attachment(id))
            .map(|attachment| AttachmentLink::from(&attachment))
            .collect();
        Self {
            href: volume_href(&volume.id),
            id: volume.id.to_string(),
            name: volume.name,
            description: volume.description,
            size: volume.size,
            state: volume.state,
            locked: volume.locked,
            billing_cycle: volume.billing_cycle,
            plan: volume.plan_id.map(|id| Reference { id }),
            facility: volume.facility_id.map(|id| Reference { id }),
            project: Link::new(&volume.project_id, project_href(&volume.project_id)),
            attachments,
            created_at: volume.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeList {
    pub volumes: Vec<VolumeResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedVolume {
    #[serde(flatten)]
    pub snapshot: VolumeSnapshot,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentResource {
    pub id: String,
    pub href: String,
    pub device: Link,
    /// The volume as it was when attached
    pub volume: AttachedVolume,
    pub created_at: DateTime<Utc>,
}

impl From<Attachment> for AttachmentResource {
    fn from(attachment: Attachment) -> Self {
        Self {
            id: attachment.id.to_string(),
            href: attachment_href(&attachment.id),
            device: Link::new(attachment.device_id, device_href(&attachment.device_id)),
            volume: AttachedVolume {
                href: volume_href(&attachment.volume.id),
                snapshot: attachment.volume,
            },
            created_at: attachment.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceResource {
    pub id: String,
    pub hostname: String,
    pub state: ResourceState,
    pub facility: Facility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    pub volumes: Vec<Link>,
    pub project: Link,
    pub created_at: DateTime<Utc>,
    pub href: String,
}

impl From<Device> for DeviceResource {
    fn from(device: Device) -> Self {
        Self {
            href: device_href(&device.id),
            id: device.id.to_string(),
            hostname: device.hostname,
            state: device.state,
            facility: device.facility,
            plan: device.plan,
            volumes: device
                .volumes
                .iter()
                .map(|id| Link::new(id, volume_href(id)))
                .collect(),
            project: Link::new(&device.project_id, project_href(&device.project_id)),
            created_at: device.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceList {
    pub devices: Vec<DeviceResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityList {
    pub facilities: Vec<Facility>,
}

/// Body of an attach call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachRequest {
    pub device_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BgpConfigResource {
    #[serde(flatten)]
    pub config: BgpConfig,
    pub project: Link,
}

impl From<BgpConfig> for BgpConfigResource {
    fn from(config: BgpConfig) -> Self {
        Self {
            project: Link::new(&config.project_id, project_href(&config.project_id)),
            config,
        }
    }
}
