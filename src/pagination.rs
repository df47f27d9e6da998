// Copyright (c) 2025 - Cowboy AI, Inc.
//! Listing Pagination
//!
//! Listings are sorted by the lexical order of entity ids before they are
//! sliced, so the same store state and the same options always produce the
//! same page.
//!
//! `page` is a start offset into the sorted listing, not a page number.
//! Both parameters arrive as text on the query string; text that is not an
//! integer is a validation error rather than a silent default.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::{StoreError, StoreResult};

/// Offset and size of the requested slice of a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Start offset; unset means 0
    pub page: Option<i64>,
    /// Maximum number of entries; unset or `<= 0` means no limit
    pub per_page: Option<i64>,
}

impl ListOptions {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    /// Parse `page` and `per_page` from decoded query parameters
    ///
    /// Absent or empty values leave the option unset.
    pub fn from_query(params: &HashMap<String, String>) -> StoreResult<Self> {
        Ok(Self {
            page: parse_param(params, "page")?,
            per_page: parse_param(params, "per_page")?,
        })
    }

    /// Bounds of the slice these options select out of `total` entries
    pub fn bounds(&self, total: usize) -> (usize, usize) {
        slice_bounds(total, self.page.unwrap_or(0), self.per_page.unwrap_or(0))
    }

    /// Apply these options to an already sorted listing
    pub fn apply<T>(&self, mut items: Vec<T>) -> Vec<T> {
        let (start, end) = self.bounds(items.len());
        items.truncate(end);
        items.drain(..start);
        items
    }
}

fn parse_param(params: &HashMap<String, String>, name: &'static str) -> StoreResult<Option<i64>> {
    match params.get(name).map(String::as_str) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse::<i64>().map(Some).map_err(|e| {
            StoreError::validation(name, format!("error converting {name} {raw} to int: {e}"))
        }),
    }
}

/// Compute `(start, end)` of a page over `total` entries
///
/// - `per_page <= 0` means the whole listing
/// - a start at or past the end is pulled back to the last entry
/// - a negative start becomes 0
/// - `end` never exceeds `total`
///
/// The result always satisfies `start <= end <= total`.
pub fn slice_bounds(total: usize, page: i64, per_page: i64) -> (usize, usize) {
    let count = if per_page > 0 {
        usize::try_from(per_page).unwrap_or(usize::MAX)
    } else {
        total
    };

    let start = if page <= 0 {
        0
    } else {
        usize::try_from(page).unwrap_or(usize::MAX)
    };
    let start = if start >= total {
        total.saturating_sub(1)
    } else {
        start
    };

    let end = start.saturating_add(count).min(total);
    (start, end)
}
