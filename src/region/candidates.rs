//! Candidate postal-code selection.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::table::{REGIONS, SECONDARY_POSTAL};

static PRIMARY: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| REGIONS.iter().map(|(code, _, zip)| (*code, *zip)).collect());

static SECONDARY: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| SECONDARY_POSTAL.iter().copied().collect());

/// Returns the ordered postal-code candidates for a normalized region code.
///
/// The primary (capital) code always comes first, followed by any curated
/// secondary codes in table order. Codes already present earlier in the list
/// are skipped. An unknown code yields an empty list.
pub fn candidates(code: &str) -> Vec<&'static str> {
    let Some(primary) = PRIMARY.get(code) else {
        return Vec::new();
    };

    let mut list = vec![*primary];
    if let Some(secondary) = SECONDARY.get(code) {
        for zip in secondary.iter() {
            if !list.contains(zip) {
                list.push(*zip);
            }
        }
    }
    list
}

/// Like [`candidates`], truncated to at most `limit` entries.
pub fn candidates_limited(code: &str, limit: usize) -> Vec<&'static str> {
    let mut list = candidates(code);
    list.truncate(limit);
    list
}
