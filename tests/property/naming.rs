// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Volume Naming

use packet_api_server::domain::{volume_id_to_name, VolumeId};
use proptest::prelude::*;

proptest! {
    /// The name depends only on the text before the first hyphen
    #[test]
    fn prop_name_uses_first_segment(head in "[a-z0-9]{0,12}", tail in "[a-z0-9-]{0,24}") {
        let id = format!("{head}-{tail}");
        prop_assert_eq!(volume_id_to_name(&id), format!("volume-{head}"));
    }

    /// Ids without a hyphen are used whole
    #[test]
    fn prop_unhyphenated_id_used_whole(id in "[a-z0-9]{0,32}") {
        prop_assert_eq!(volume_id_to_name(&id), format!("volume-{id}"));
    }

    /// Generated volume ids yield an eight character segment
    #[test]
    fn prop_generated_ids_name_shape(bits in any::<u128>()) {
        let id = VolumeId::from_uuid(uuid::Uuid::from_u128(bits));
        let name = volume_id_to_name(&id.to_string());
        prop_assert_eq!(name.len(), "volume-".len() + 8);
        prop_assert!(id.to_string().starts_with(&name["volume-".len()..]));
    }
}
