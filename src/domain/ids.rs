// Copyright (c) 2025 - Cowboy AI, Inc.
//! Typed entity identifiers
//!
//! Every entity kind gets its own newtype over a v4 UUID so a device id can
//! never be handed to a volume lookup. Identifiers serialize as the plain
//! hyphenated string and order lexically by that string, which is the
//! listing order of the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Entity kinds an operation can fail to find
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Device,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Device => "device",
        };
        f.write_str(name)
    }
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.hyphenated())
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`Facility`](super::Facility)
    FacilityId
);
entity_id!(
    /// Identifier of a [`Plan`](super::Plan)
    PlanId
);
entity_id!(
    /// Identifier of a [`Device`](super::Device)
    DeviceId
);
entity_id!(
    /// Identifier of a [`Volume`](super::Volume)
    VolumeId
);
entity_id!(
    /// Identifier of an [`Attachment`](super::Attachment)
    AttachmentId
);
entity_id!(
    /// Identifier of a [`BgpConfig`](super::BgpConfig)
    BgpConfigId
);

/// Project scope for devices, volumes and BGP configs
///
/// Projects are never created through the store; any string the caller
/// names is a valid scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
