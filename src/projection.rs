// Copyright (c) 2025 - Cowboy AI, Inc.

//! Read-side projections of the entity graph
//!
//! A projection derives a view from the store without changing it. The only
//! view served today is the device metadata view: the storage topology a
//! device is expected to discover about itself.
//!
//! # Architecture
//!
//! ```text
//! Device ──volumes──> Volume ──attachments[0]──> Attachment
//!                        │                           │
//!                        ▼                           ▼
//!                 name, capacity            iqn, endpoint pair
//!                        └────────────┬──────────────┘
//!                                     ▼
//!                                 VolumeInfo
//! ```

pub mod metadata;

pub use metadata::{project_device, Capacity, MetadataProjector, MetadataView, VolumeInfo};
