// Copyright (c) 2025 - Cowboy AI, Inc.
//! Facilities and plans
//!
//! Both are immutable catalog entries: once created they are only ever read,
//! so devices hold their own copies rather than a reference back into the
//! store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{FacilityId, PlanId};

/// Id of the facility a fresh store reports when none has been created
pub const DEFAULT_FACILITY_ID: FacilityId =
    FacilityId::from_uuid(Uuid::from_u128(0xe1e9c52e_a0bc_4117_b996_0fc94843ea09));

/// A physical location devices and volumes are provisioned in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,
    /// Short locator slug, unique among facilities (e.g. `ewr1`)
    pub code: String,
}

impl Facility {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: FacilityId::new(),
            name: name.into(),
            code: code.into(),
        }
    }

    /// The facility a store with no facilities of its own knows about
    pub fn default_facility() -> Self {
        Self {
            id: DEFAULT_FACILITY_ID,
            name: "Parsippany, NJ".to_string(),
            code: "ewr1".to_string(),
        }
    }
}

/// A device size/type tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    pub name: String,
    /// Unique among plans (e.g. `baremetal_0`)
    pub slug: String,
}

impl Plan {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PlanId::new(),
            name: name.into(),
            slug: slug.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_facility_is_ewr1() {
        let facility = Facility::default_facility();
        assert_eq!(facility.code, "ewr1");
        assert_eq!(
            facility.id.to_string(),
            "e1e9c52e-a0bc-4117-b996-0fc94843ea09"
        );
    }

    #[test]
    fn test_new_entries_get_distinct_ids() {
        let a = Plan::new("baremetal_0", "Type 0");
        let b = Plan::new("baremetal_0", "Type 0");
        assert_ne!(a.id, b.id);
    }
}
