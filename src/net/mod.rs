//! Network helpers: address parsing, routability, masking and capped body reads.

mod address;
mod body;
mod mask;

// Re-export public API
pub use address::{is_routable, parse_ip, parse_ipv4_literal};
pub use body::{read_capped, CappedBody};
pub use mask::mask_ip;
