// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for packet-api-server
//!
//! Provides a small, fixed entity graph most scenarios start from: one
//! facility `F1`, one device `d1` in project `p1` and one 10 GB volume.
//! Ids are generated by the store, so tests compare ids taken from the
//! fixture rather than literals.

#![allow(dead_code)]

use std::collections::HashMap;

use packet_api_server::api::AppState;
use packet_api_server::domain::{
    Device, DeviceCreateRequest, Facility, ProjectId, Volume, VolumeCreateRequest,
};
use packet_api_server::projection::MetadataProjector;
use packet_api_server::store::{DataStore, MemoryStore, SharedStore};

pub const PROJECT: &str = "p1";
pub const OTHER_PROJECT: &str = "p2";
pub const FACILITY_NAME: &str = "F1";
pub const FACILITY_CODE: &str = "f1";
pub const HOSTNAME: &str = "d1";
pub const VOLUME_SIZE: u64 = 10;

/// Fixed id used where only the derived volume name matters
pub const VOLUME_ID: &str = "3ee59355-a51a-42a8-b848-86626cc532f0";

pub fn project() -> ProjectId {
    ProjectId::from(PROJECT)
}

pub fn other_project() -> ProjectId {
    ProjectId::from(OTHER_PROJECT)
}

/// Store seeded with one facility, one device and one volume
pub struct Topology {
    pub store: MemoryStore,
    pub facility: Facility,
    pub device: Device,
    pub volume: Volume,
}

impl Topology {
    /// Shared state serving metadata for the fixture device
    pub fn into_app_state(self) -> (AppState, Device, Volume) {
        let state = AppState::new(
            SharedStore::new(self.store),
            MetadataProjector::new(Some(self.device.id)),
        );
        (state, self.device, self.volume)
    }
}

pub fn topology() -> Topology {
    let mut store = MemoryStore::new();
    let facility = store
        .create_facility(FACILITY_NAME, FACILITY_CODE)
        .expect("fixture facility");
    let device = store
        .create_device(&project(), DeviceCreateRequest::new(HOSTNAME, facility.id))
        .expect("fixture device");
    let volume = store.create_volume(&project(), VolumeCreateRequest::with_size(VOLUME_SIZE));
    Topology {
        store,
        facility,
        device,
        volume,
    }
}

/// Create `count` volumes of increasing size in `project`
pub fn volumes(store: &mut dyn DataStore, project: &ProjectId, count: usize) -> Vec<Volume> {
    (0..count)
        .map(|i| store.create_volume(project, VolumeCreateRequest::with_size(i as u64 + 1)))
        .collect()
}

/// Query string map for listing calls
pub fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
