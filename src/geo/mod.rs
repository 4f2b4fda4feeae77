//! IP geolocation through public providers.
//!
//! Three entry points:
//! - `tunnel_geo`: ip-api style document fetched through the proxy tunnel
//! - `PlainLookup`: ipwho.is style lookup queried directly
//! - `discover_egress_ip`: plain-text IP-echo endpoints fetched through the tunnel

mod discover;
mod lookup;
mod tunnel;
mod types;

// Re-export public API
pub use discover::discover_egress_ip;
pub use lookup::PlainLookup;
pub use tunnel::tunnel_geo;
pub use types::GeoResult;
