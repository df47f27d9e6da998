// Copyright (c) 2025 - Cowboy AI, Inc.
//! Device-volume bindings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

use super::{AttachmentId, DeviceId, Volume, VolumeId, VolumeSnapshot};

/// A single binding of one volume to one device
///
/// The attachment record is the only authority on whether a volume is in use
/// by a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: AttachmentId,
    pub device_id: DeviceId,
    pub volume: VolumeSnapshot,
    pub created_at: DateTime<Utc>,
}

impl Attachment {
    pub fn new(volume: &Volume, device_id: DeviceId) -> Self {
        Self {
            id: AttachmentId::new(),
            device_id,
            volume: volume.snapshot(),
            created_at: Utc::now(),
        }
    }

    pub fn volume_id(&self) -> VolumeId {
        self.volume.id
    }
}

/// How a device reaches an attached volume over iSCSI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportInfo {
    /// Target identifier (IQN)
    pub iqn: String,
    /// The two portal addresses serving the target
    pub endpoints: [IpAddr; 2],
}

impl Default for TransportInfo {
    fn default() -> Self {
        Self {
            iqn: "iqn.2013-05.com.daterainc:tc:01:sn:73d3e29022fddba4".to_string(),
            endpoints: [
                IpAddr::V4(Ipv4Addr::new(10, 144, 32, 8)),
                IpAddr::V4(Ipv4Addr::new(10, 144, 48, 8)),
            ],
        }
    }
}
