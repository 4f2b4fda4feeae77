//! Region normalization.
//!
//! Canonicalizes a free-form state string (two-letter code or full name) to a
//! `Region`. Exact matching only; no partial or fuzzy matching.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::table::REGIONS;

/// A recognized US state or territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Two-letter uppercase code
    pub code: &'static str,
    /// Full name
    pub name: &'static str,
}

static BY_CODE: LazyLock<HashMap<&'static str, Region>> = LazyLock::new(|| {
    REGIONS
        .iter()
        .map(|&(code, name, _)| (code, Region { code, name }))
        .collect()
});

static BY_NAME: LazyLock<HashMap<String, Region>> = LazyLock::new(|| {
    REGIONS
        .iter()
        .map(|&(code, name, _)| (name.to_lowercase(), Region { code, name }))
        .collect()
});

/// Normalizes a claimed region.
///
/// The input is trimmed and first checked as a two-letter code
/// (case-insensitive), then as a full name (case-insensitive). Unrecognized
/// input yields `None`, which callers treat as "indeterminate" rather than a
/// fault.
///
/// # Examples
///
/// ```
/// use region_verify::region::normalize_region;
///
/// assert_eq!(normalize_region(" pa ").map(|r| r.code), Some("PA"));
/// assert_eq!(normalize_region("new york").map(|r| r.code), Some("NY"));
/// assert!(normalize_region("Not A State").is_none());
/// ```
pub fn normalize_region(input: &str) -> Option<Region> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let upper = trimmed.to_uppercase();
    if let Some(region) = BY_CODE.get(upper.as_str()) {
        return Some(*region);
    }

    BY_NAME.get(&trimmed.to_lowercase()).copied()
}

/// Looks up the full name for an exact (already canonical) region code.
pub fn region_name(code: &str) -> Option<&'static str> {
    BY_CODE.get(code).map(|region| region.name)
}

/// Iterates every supported region in table order.
pub fn all_regions() -> impl Iterator<Item = Region> {
    REGIONS.iter().map(|&(code, name, _)| Region { code, name })
}
