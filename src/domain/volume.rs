// Copyright (c) 2025 - Cowboy AI, Inc.
//! Volume entity and its naming rule

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AttachmentId, ProjectId, ResourceState, VolumeId};

const VOLUME_NAME_PREFIX: &str = "volume-";

/// Derive the API-visible name of a volume from its id
///
/// The name is the fixed prefix followed by the id's first hyphen-delimited
/// segment: `3ee59355-a51a-42a8-b848-86626cc532f0` becomes `volume-3ee59355`.
pub fn volume_id_to_name(id: &str) -> String {
    let head = id.split('-').next().unwrap_or_default();
    format!("{VOLUME_NAME_PREFIX}{head}")
}

/// A block-storage unit, attachable to devices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    pub id: VolumeId,
    pub project_id: ProjectId,
    pub name: String,
    pub description: String,
    /// Capacity in gigabytes
    pub size: u64,
    pub state: ResourceState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<String>,
    pub locked: bool,
    /// Attachments of this volume, earliest first
    #[serde(default)]
    pub attachments: Vec<AttachmentId>,
    pub created_at: DateTime<Utc>,
}

impl Volume {
    pub fn new(project_id: ProjectId, request: VolumeCreateRequest) -> Self {
        let id = VolumeId::new();
        Self {
            id,
            project_id,
            name: volume_id_to_name(&id.to_string()),
            description: request.description,
            size: request.size,
            state: ResourceState::Active,
            plan_id: request.plan_id.filter(|plan| !plan.is_empty()),
            facility_id: request.facility_id.filter(|facility| !facility.is_empty()),
            billing_cycle: request.billing_cycle.filter(|cycle| !cycle.is_empty()),
            locked: request.locked,
            attachments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Frozen copy of the fields an attachment records at attach time
    pub fn snapshot(&self) -> VolumeSnapshot {
        VolumeSnapshot {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            size: self.size,
            state: self.state,
        }
    }
}

/// Body of a volume creation call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeCreateRequest {
    pub size: u64,
    pub description: String,
    pub plan_id: Option<String>,
    pub facility_id: Option<String>,
    pub billing_cycle: Option<String>,
    pub locked: bool,
}

impl VolumeCreateRequest {
    pub fn with_size(size: u64) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }
}

/// Volume state as recorded by an attachment when it was made
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeSnapshot {
    pub id: VolumeId,
    pub name: String,
    pub description: String,
    pub size: u64,
    pub state: ResourceState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_name_uses_first_segment() {
        assert_eq!(
            volume_id_to_name("3ee59355-a51a-42a8-b848-86626cc532f0"),
            "volume-3ee59355"
        );
    }

    #[test]
    fn test_volume_name_without_hyphen_uses_whole_id() {
        assert_eq!(volume_id_to_name("abc"), "volume-abc");
        assert_eq!(volume_id_to_name(""), "volume-");
    }

    #[test]
    fn test_new_volume_name_matches_its_id() {
        let volume = Volume::new(ProjectId::from("p1"), VolumeCreateRequest::with_size(10));
        assert_eq!(volume.name, volume_id_to_name(&volume.id.to_string()));
        assert_eq!(volume.size, 10);
        assert!(volume.attachments.is_empty());
    }

    #[test]
    fn test_create_request_accepts_sparse_body() {
        let request: VolumeCreateRequest =
            serde_json::from_str(r#"{"size": 10, "plan_id": "storage_1"}"#).unwrap();
        assert_eq!(request.size, 10);
        assert_eq!(request.plan_id.as_deref(), Some("storage_1"));
        assert!(!request.locked);
    }
}
