// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Relationship Maintenance
//!
//! Arbitrary sequences of attach, detach and delete calls must leave the
//! volume and device sides of every binding in agreement.

use std::collections::HashSet;

use packet_api_server::domain::{
    AttachmentId, DeviceCreateRequest, DeviceId, ProjectId, VolumeCreateRequest, VolumeId,
};
use packet_api_server::pagination::ListOptions;
use packet_api_server::store::{DataStore, MemoryStore};
use proptest::prelude::*;

const DEVICES: usize = 3;
const VOLUMES: usize = 4;

#[derive(Debug, Clone)]
enum Op {
    Attach { volume: usize, device: usize },
    Detach { nth: usize },
    DeleteVolume { volume: usize },
    DeleteDevice { device: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..VOLUMES, 0..DEVICES).prop_map(|(volume, device)| Op::Attach { volume, device }),
        3 => (0usize..16).prop_map(|nth| Op::Detach { nth }),
        1 => (0..VOLUMES).prop_map(|volume| Op::DeleteVolume { volume }),
        1 => (0..DEVICES).prop_map(|device| Op::DeleteDevice { device }),
    ]
}

struct World {
    store: MemoryStore,
    project: ProjectId,
    devices: Vec<DeviceId>,
    volumes: Vec<VolumeId>,
    attachments: Vec<AttachmentId>,
}

fn world() -> World {
    let project = ProjectId::from("p1");
    let mut store = MemoryStore::new();
    let facility = store.create_facility("F1", "f1").unwrap();
    let devices = (0..DEVICES)
        .map(|i| {
            store
                .create_device(&project, DeviceCreateRequest::new(format!("d{i}"), facility.id))
                .unwrap()
                .id
        })
        .collect();
    let volumes = (0..VOLUMES)
        .map(|i| {
            store
                .create_volume(&project, VolumeCreateRequest::with_size(i as u64 + 1))
                .id
        })
        .collect();
    World {
        store,
        project,
        devices,
        volumes,
        attachments: Vec::new(),
    }
}

impl World {
    fn apply(&mut self, op: &Op) {
        match *op {
            Op::Attach { volume, device } => {
                if let Some(attachment) = self
                    .store
                    .attach_volume(&self.volumes[volume], &self.devices[device])
                {
                    self.attachments.push(attachment.id);
                }
            }
            Op::Detach { nth } => {
                if !self.attachments.is_empty() {
                    let id = self.attachments.remove(nth % self.attachments.len());
                    self.store.detach_volume(&id);
                }
            }
            Op::DeleteVolume { volume } => {
                self.store.delete_volume(&self.volumes[volume]);
            }
            Op::DeleteDevice { device } => {
                self.store.delete_device(&self.devices[device]);
            }
        }
    }

    fn check_consistent(&self) -> Result<(), TestCaseError> {
        let all = ListOptions::default();

        for volume in self.store.list_volumes(&self.project, &all) {
            for id in &volume.attachments {
                let attachment = self.store.get_attachment(id);
                prop_assert!(attachment.is_some(), "volume lists dangling attachment");
                let attachment = attachment.unwrap();
                prop_assert_eq!(attachment.volume.id, volume.id);
                let device = self.store.get_device(&attachment.device_id);
                prop_assert!(device.is_some(), "attachment to deleted device");
                prop_assert!(device.unwrap().volumes.contains(&volume.id));
            }
        }

        for device in self.store.list_devices(&self.project, &all) {
            let unique: HashSet<_> = device.volumes.iter().collect();
            prop_assert_eq!(unique.len(), device.volumes.len());
            for volume_id in &device.volumes {
                let volume = self.store.get_volume(volume_id);
                prop_assert!(volume.is_some(), "device lists deleted volume");
                let bound = volume.unwrap().attachments.iter().any(|id| {
                    self.store
                        .get_attachment(id)
                        .is_some_and(|a| a.device_id == device.id)
                });
                prop_assert!(bound, "device lists volume with no binding to it");
            }
        }
        Ok(())
    }
}

proptest! {
    #[test]
    fn prop_relations_stay_consistent(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut world = world();
        for op in &ops {
            world.apply(op);
            world.check_consistent()?;
        }
    }

    /// Detaching a fresh attachment restores both entities exactly
    #[test]
    fn prop_detach_undoes_attach(
        ops in prop::collection::vec(op_strategy(), 0..20),
        volume in 0..VOLUMES,
        device in 0..DEVICES,
    ) {
        let mut world = world();
        for op in &ops {
            world.apply(op);
        }
        let volume_id = world.volumes[volume];
        let device_id = world.devices[device];
        let volume_before = world.store.get_volume(&volume_id);
        let device_before = world.store.get_device(&device_id);

        if let Some(attachment) = world.store.attach_volume(&volume_id, &device_id) {
            prop_assert!(world.store.detach_volume(&attachment.id));
        }

        prop_assert_eq!(world.store.get_volume(&volume_id), volume_before);
        prop_assert_eq!(world.store.get_device(&device_id), device_before);
    }
}
