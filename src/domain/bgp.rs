// Copyright (c) 2025 - Cowboy AI, Inc.
//! Per-project BGP configuration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BgpConfigId, ProjectId};

/// Where announced routes are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentType {
    Local,
    Global,
}

/// BGP session settings of a project; at most one per project and never
/// removed once enabled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BgpConfig {
    pub id: BgpConfigId,
    pub project_id: ProjectId,
    pub deployment_type: DeploymentType,
    pub asn: u32,
    /// Session password; accepted but never echoed back
    #[serde(skip_serializing, default)]
    pub md5: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of a BGP enable call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnableBgpRequest {
    pub deployment_type: DeploymentType,
    pub asn: u32,
    #[serde(default)]
    pub md5: Option<String>,
}

impl BgpConfig {
    pub fn new(project_id: ProjectId, request: EnableBgpRequest) -> Self {
        Self {
            id: BgpConfigId::new(),
            project_id,
            deployment_type: request.deployment_type,
            asn: request.asn,
            md5: request.md5,
            created_at: Utc::now(),
        }
    }
}
