// Copyright (c) 2025 - Cowboy AI, Inc.
//! Device entity
//!
//! A device owns copies of its facility and plan and keeps an ordered list
//! of the volumes attached to it. That list is only ever changed by the
//! store's attach/detach operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DeviceId, Facility, FacilityId, Plan, PlanId, ProjectId, VolumeId};

/// Lifecycle tag shared by devices and volumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceState {
    Queued,
    Provisioning,
    #[default]
    Active,
    Inactive,
}

/// A provisioned compute instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub project_id: ProjectId,
    pub hostname: String,
    pub state: ResourceState,
    pub facility: Facility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    /// Attached volumes, earliest attachment first, each volume at most once
    #[serde(default)]
    pub volumes: Vec<VolumeId>,
    pub created_at: DateTime<Utc>,
}

impl Device {
    /// Build a new active device; the caller has already resolved the
    /// facility and plan references.
    pub fn new(
        project_id: ProjectId,
        hostname: impl Into<String>,
        facility: Facility,
        plan: Option<Plan>,
    ) -> Self {
        Self {
            id: DeviceId::new(),
            project_id,
            hostname: hostname.into(),
            state: ResourceState::Active,
            facility,
            plan,
            volumes: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn has_volume(&self, volume_id: &VolumeId) -> bool {
        self.volumes.contains(volume_id)
    }
}

/// Input to device creation
///
/// The facility is required and the plan optional; both must name entities
/// that already exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCreateRequest {
    pub hostname: String,
    #[serde(default)]
    pub facility: Option<FacilityId>,
    #[serde(default)]
    pub plan: Option<PlanId>,
}

impl DeviceCreateRequest {
    pub fn new(hostname: impl Into<String>, facility: FacilityId) -> Self {
        Self {
            hostname: hostname.into(),
            facility: Some(facility),
            plan: None,
        }
    }

    pub fn with_plan(mut self, plan: PlanId) -> Self {
        self.plan = Some(plan);
        self
    }
}

/// Field changes applied by a device update
///
/// Relations (facility, plan, volumes) cannot be changed this way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceUpdate {
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub state: Option<ResourceState>,
}

impl DeviceUpdate {
    pub(crate) fn apply(self, device: &mut Device) {
        if let Some(hostname) = self.hostname {
            device.hostname = hostname;
        }
        if let Some(state) = self.state {
            device.state = state;
        }
    }
}
