//! US region normalization and postal-code candidate selection.
//!
//! Both operate on immutable static tables; nothing here performs I/O.

mod candidates;
mod normalize;
mod table;

// Re-export public API
pub use candidates::{candidates, candidates_limited};
pub use normalize::{all_regions, normalize_region, region_name, Region};
