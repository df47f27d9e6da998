// Copyright (c) 2025 - Cowboy AI, Inc.
//! Device metadata projection
//!
//! The metadata service answers for one device chosen at deployment time;
//! a request has no way to name a different device.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::net::IpAddr;
use tracing::{debug, warn};

use crate::domain::{volume_id_to_name, DeviceId};
use crate::store::DataStore;

/// Unit every capacity is reported in
pub const CAPACITY_UNIT: &str = "gb";

/// Storage topology of a device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataView {
    pub volumes: Vec<VolumeInfo>,
}

/// One attached volume as seen from the device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeInfo {
    pub name: String,
    pub iqn: String,
    pub ips: Vec<IpAddr>,
    pub capacity: Capacity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    /// Encoded as a JSON string on the wire
    #[serde(serialize_with = "size_to_string", deserialize_with = "size_from_string")]
    pub size: u64,
    pub unit: String,
}

impl Capacity {
    pub fn gigabytes(size: u64) -> Self {
        Self {
            size,
            unit: CAPACITY_UNIT.to_string(),
        }
    }
}

fn size_to_string<S: Serializer>(size: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(size)
}

fn size_from_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

/// Build the metadata view of `device_id`, or `None` if the device is unknown
///
/// Each volume on the device contributes one entry, in the device's volume
/// order. The transport details come from the volume's earliest attachment.
/// A volume with no attachment, or one that no longer resolves, is left out
/// of the view.
pub fn project_device(store: &dyn DataStore, device_id: &DeviceId) -> Option<MetadataView> {
    let device = store.get_device(device_id)?;

    let volumes = device
        .volumes
        .iter()
        .filter_map(|volume_id| {
            let Some(volume) = store.get_volume(volume_id) else {
                warn!(device_id = %device_id, volume_id = %volume_id, "volume listed on device does not exist");
                return None;
            };
            let Some(attachment_id) = volume.attachments.first() else {
                warn!(device_id = %device_id, volume_id = %volume_id, "volume has no attachment");
                return None;
            };
            let transport = store.attachment_transport(attachment_id)?;
            Some(VolumeInfo {
                name: volume_id_to_name(&volume.id.to_string()),
                iqn: transport.iqn,
                ips: transport.endpoints.to_vec(),
                capacity: Capacity::gigabytes(volume.size),
            })
        })
        .collect();

    Some(MetadataView { volumes })
}

/// Serves the metadata view of the configured device
#[derive(Debug, Clone, Default)]
pub struct MetadataProjector {
    target: Option<DeviceId>,
}

impl MetadataProjector {
    pub fn new(target: Option<DeviceId>) -> Self {
        Self { target }
    }

    /// The configured device's view; `None` when no device is configured
    /// or it does not exist
    pub fn project(&self, store: &dyn DataStore) -> Option<MetadataView> {
        let Some(target) = &self.target else {
            debug!("no metadata device configured");
            return None;
        };
        project_device(store, target)
    }
}
