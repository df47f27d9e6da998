// Copyright (c) 2025 - Cowboy AI, Inc.
//! Device ↔ Volume ↔ Attachment relationship maintenance
//!
//! An attachment is the single source of truth for a binding. The two lists
//! that mirror it are kept in step here and nowhere else:
//!
//! - `Volume::attachments` holds one entry per attachment of the volume
//! - `Device::volumes` holds each volume with at least one attachment to the
//!   device, once, in order of first attachment
//!
//! Removals filter in place with `retain`, keeping the relative order of
//! surviving entries.

use tracing::{debug, info};

use super::MemoryStore;
use crate::domain::{Attachment, AttachmentId, DeviceId, VolumeId};

impl MemoryStore {
    /// Bind `volume_id` to `device_id`, or `None` if either is unknown
    ///
    /// Volumes may be attached to any number of devices at once.
    pub(super) fn bind(
        &mut self,
        volume_id: &VolumeId,
        device_id: &DeviceId,
    ) -> Option<Attachment> {
        let (Some(volume), Some(device)) = (
            self.volumes.get_mut(volume_id),
            self.devices.get_mut(device_id),
        ) else {
            debug!(volume_id = %volume_id, device_id = %device_id, "attach target not found");
            return None;
        };

        let attachment = Attachment::new(volume, *device_id);
        volume.attachments.push(attachment.id);
        if !device.has_volume(volume_id) {
            device.volumes.push(*volume_id);
        }
        self.attachments.insert(attachment.id, attachment.clone());

        info!(
            attachment_id = %attachment.id,
            volume_id = %volume_id,
            device_id = %device_id,
            "attached volume"
        );
        Some(attachment)
    }

    /// Remove an attachment and its back-references; `false` if unknown
    pub(super) fn unbind(&mut self, attachment_id: &AttachmentId) -> bool {
        let Some(attachment) = self.attachments.remove(attachment_id) else {
            return false;
        };
        let volume_id = attachment.volume_id();
        let device_id = attachment.device_id;

        if let Some(volume) = self.volumes.get_mut(&volume_id) {
            volume.attachments.retain(|id| id != attachment_id);
        }

        let still_bound = self
            .attachments
            .values()
            .any(|other| other.device_id == device_id && other.volume_id() == volume_id);
        if !still_bound {
            if let Some(device) = self.devices.get_mut(&device_id) {
                device.volumes.retain(|id| *id != volume_id);
            }
        }

        info!(
            attachment_id = %attachment_id,
            volume_id = %volume_id,
            device_id = %device_id,
            "detached volume"
        );
        true
    }

    /// Remove every attachment held by a device
    pub(super) fn detach_device(&mut self, device_id: &DeviceId) {
        let held: Vec<AttachmentId> = self
            .attachments
            .values()
            .filter(|a| a.device_id == *device_id)
            .map(|a| a.id)
            .collect();
        for attachment_id in &held {
            self.unbind(attachment_id);
        }
    }

    /// Remove every attachment of a volume, on whatever device
    pub(super) fn detach_everywhere(&mut self, volume_id: &VolumeId) {
        let held = self
            .volumes
            .get(volume_id)
            .map(|v| v.attachments.clone())
            .unwrap_or_default();
        for attachment_id in &held {
            self.unbind(attachment_id);
        }
    }
}
