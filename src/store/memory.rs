// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory entity store
//!
//! Entities live in ordered maps keyed by their typed id, so iterating a map
//! yields the lexical id order listings are defined by without re-sorting.
//! Nothing is persisted; dropping the store discards all state.

use std::collections::BTreeMap;
use tracing::{debug, info};

use super::DataStore;
use crate::domain::{
    Attachment, AttachmentId, BgpConfig, Device, DeviceCreateRequest, DeviceId, DeviceUpdate,
    EnableBgpRequest, EntityKind, Facility, FacilityId, Plan, PlanId, ProjectId, TransportInfo,
    Volume, VolumeCreateRequest, VolumeId,
};
use crate::errors::{StoreError, StoreResult};
use crate::pagination::ListOptions;

/// [`DataStore`] held entirely in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub(super) facilities: BTreeMap<FacilityId, Facility>,
    pub(super) plans: BTreeMap<PlanId, Plan>,
    pub(super) devices: BTreeMap<DeviceId, Device>,
    pub(super) volumes: BTreeMap<VolumeId, Volume>,
    pub(super) attachments: BTreeMap<AttachmentId, Attachment>,
    pub(super) bgp_configs: BTreeMap<ProjectId, BgpConfig>,
    pub(super) transport: TransportInfo,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `transport` for every attachment instead of the built-in target
    pub fn with_transport(mut self, transport: TransportInfo) -> Self {
        self.transport = transport;
        self
    }

    /// Facilities visible to callers: the stored ones, or the default
    /// facility while none have been created
    fn facility_catalog(&self) -> Vec<Facility> {
        if self.facilities.is_empty() {
            vec![Facility::default_facility()]
        } else {
            self.facilities.values().cloned().collect()
        }
    }
}

impl DataStore for MemoryStore {
    fn create_facility(&mut self, name: &str, code: &str) -> StoreResult<Facility> {
        if self.facilities.values().any(|f| f.code == code) {
            return Err(StoreError::validation(
                "code",
                format!("facility code {code} already in use"),
            ));
        }
        let facility = Facility::new(name, code);
        info!(facility_id = %facility.id, code, "created facility");
        self.facilities.insert(facility.id, facility.clone());
        Ok(facility)
    }

    fn list_facilities(&self) -> Vec<Facility> {
        self.facility_catalog()
    }

    fn get_facility(&self, id: &FacilityId) -> Option<Facility> {
        self.facility_catalog().into_iter().find(|f| f.id == *id)
    }

    fn facility_by_code(&self, code: &str) -> Option<Facility> {
        self.facility_catalog().into_iter().find(|f| f.code == code)
    }

    fn create_plan(&mut self, slug: &str, name: &str) -> StoreResult<Plan> {
        if self.plans.values().any(|p| p.slug == slug) {
            return Err(StoreError::validation(
                "slug",
                format!("plan slug {slug} already in use"),
            ));
        }
        let plan = Plan::new(slug, name);
        info!(plan_id = %plan.id, slug, "created plan");
        self.plans.insert(plan.id, plan.clone());
        Ok(plan)
    }

    fn list_plans(&self) -> Vec<Plan> {
        self.plans.values().cloned().collect()
    }

    fn get_plan(&self, id: &PlanId) -> Option<Plan> {
        self.plans.get(id).cloned()
    }

    fn plan_by_slug(&self, slug: &str) -> Option<Plan> {
        self.plans.values().find(|p| p.slug == slug).cloned()
    }

    fn create_device(
        &mut self,
        project: &ProjectId,
        request: DeviceCreateRequest,
    ) -> StoreResult<Device> {
        let facility_id = request
            .facility
            .ok_or_else(|| StoreError::validation("facility", "must include a valid facility"))?;
        let facility = self.get_facility(&facility_id).ok_or_else(|| {
            StoreError::validation("facility", format!("unknown facility {facility_id}"))
        })?;
        let plan = match request.plan {
            Some(plan_id) => Some(self.get_plan(&plan_id).ok_or_else(|| {
                StoreError::validation("plan", format!("unknown plan {plan_id}"))
            })?),
            None => None,
        };

        let device = Device::new(project.clone(), request.hostname, facility, plan);
        info!(
            device_id = %device.id,
            project = %project,
            hostname = %device.hostname,
            "created device"
        );
        self.devices.insert(device.id, device.clone());
        Ok(device)
    }

    fn update_device(&mut self, id: &DeviceId, update: DeviceUpdate) -> StoreResult<Device> {
        let device = self
            .devices
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Device, id))?;
        update.apply(device);
        debug!(device_id = %id, "updated device");
        Ok(device.clone())
    }

    fn list_devices(&self, project: &ProjectId, options: &ListOptions) -> Vec<Device> {
        let devices: Vec<Device> = self
            .devices
            .values()
            .filter(|d| d.project_id == *project)
            .cloned()
            .collect();
        options.apply(devices)
    }

    fn get_device(&self, id: &DeviceId) -> Option<Device> {
        self.devices.get(id).cloned()
    }

    fn delete_device(&mut self, id: &DeviceId) -> bool {
        if !self.devices.contains_key(id) {
            return false;
        }
        self.detach_device(id);
        self.devices.remove(id);
        info!(device_id = %id, "deleted device");
        true
    }

    fn create_volume(&mut self, project: &ProjectId, request: VolumeCreateRequest) -> Volume {
        let volume = Volume::new(project.clone(), request);
        info!(
            volume_id = %volume.id,
            project = %project,
            size = volume.size,
            "created volume"
        );
        self.volumes.insert(volume.id, volume.clone());
        volume
    }

    fn list_volumes(&self, project: &ProjectId, options: &ListOptions) -> Vec<Volume> {
        let volumes: Vec<Volume> = self
            .volumes
            .values()
            .filter(|v| v.project_id == *project)
            .cloned()
            .collect();
        options.apply(volumes)
    }

    fn get_volume(&self, id: &VolumeId) -> Option<Volume> {
        self.volumes.get(id).cloned()
    }

    fn delete_volume(&mut self, id: &VolumeId) -> bool {
        if !self.volumes.contains_key(id) {
            return false;
        }
        self.detach_everywhere(id);
        self.volumes.remove(id);
        info!(volume_id = %id, "deleted volume");
        true
    }

    fn attach_volume(
        &mut self,
        volume_id: &VolumeId,
        device_id: &DeviceId,
    ) -> Option<Attachment> {
        self.bind(volume_id, device_id)
    }

    fn detach_volume(&mut self, attachment_id: &AttachmentId) -> bool {
        self.unbind(attachment_id)
    }

    fn get_attachment(&self, id: &AttachmentId) -> Option<Attachment> {
        self.attachments.get(id).cloned()
    }

    fn attachment_transport(&self, id: &AttachmentId) -> Option<TransportInfo> {
        self.attachments
            .contains_key(id)
            .then(|| self.transport.clone())
    }

    fn enable_bgp(
        &mut self,
        project: &ProjectId,
        request: EnableBgpRequest,
    ) -> StoreResult<BgpConfig> {
        if request.asn == 0 {
            return Err(StoreError::validation("asn", "must be a non-zero ASN"));
        }
        if self.bgp_configs.contains_key(project) {
            return Err(StoreError::Conflict(format!(
                "BGP already enabled for project {project}"
            )));
        }
        let config = BgpConfig::new(project.clone(), request);
        info!(project = %project, asn = config.asn, "enabled BGP");
        self.bgp_configs.insert(project.clone(), config.clone());
        Ok(config)
    }

    fn get_bgp_config(&self, project: &ProjectId) -> Option<BgpConfig> {
        self.bgp_configs.get(project).cloned()
    }
}
