// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Listing Pagination

use packet_api_server::pagination::{slice_bounds, ListOptions};
use proptest::prelude::*;

proptest! {
    /// Bounds always describe a valid slice of the listing
    #[test]
    fn prop_bounds_within_listing(
        total in 0usize..500,
        page in any::<i64>(),
        per_page in any::<i64>(),
    ) {
        let (start, end) = slice_bounds(total, page, per_page);
        prop_assert!(start <= end);
        prop_assert!(end <= total);
    }

    /// A page never holds more than was asked for, and without a limit
    /// never more than the listing
    #[test]
    fn prop_page_size_is_capped(
        total in 0usize..500,
        page in -10i64..600,
        per_page in -10i64..600,
    ) {
        let (start, end) = slice_bounds(total, page, per_page);
        let cap = usize::try_from(per_page.max(0)).unwrap().max(total);
        prop_assert!(end - start <= cap);
        if per_page > 0 {
            prop_assert!(end - start <= per_page as usize);
        }
    }

    /// A non-empty listing always yields at least one entry
    #[test]
    fn prop_non_empty_listing_never_yields_empty_page(
        total in 1usize..500,
        page in any::<i64>(),
        per_page in any::<i64>(),
    ) {
        let (start, end) = slice_bounds(total, page, per_page);
        prop_assert!(end > start);
    }

    /// Applying options keeps the selected entries in listing order
    #[test]
    fn prop_apply_is_contiguous_slice(
        items in prop::collection::vec(any::<u32>(), 0..100),
        page in -5i64..120,
        per_page in -5i64..120,
    ) {
        let options = ListOptions::new(page, per_page);
        let (start, end) = options.bounds(items.len());
        prop_assert_eq!(options.apply(items.clone()), items[start..end].to_vec());
    }
}
