//! Address parsing and routability checks.
//!
//! The caller's observed address is only worth sending to a geolocation
//! provider when it is publicly routable; private, loopback, link-local,
//! multicast and reserved ranges geolocate to nothing useful.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Parses an address string the way it arrives from request metadata.
///
/// Surrounding whitespace and brackets are removed, a zone index (`%eth0`) is
/// dropped, and an IPv4-mapped IPv6 address (`::ffff:a.b.c.d`) is unwrapped to
/// its IPv4 form.
pub fn parse_ip(raw: &str) -> Option<IpAddr> {
    let trimmed = raw.trim().trim_start_matches('[').trim_end_matches(']');
    let without_zone = trimmed.split('%').next().unwrap_or_default();
    if without_zone.is_empty() {
        return None;
    }

    match without_zone.parse::<IpAddr>().ok()? {
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => Some(IpAddr::V4(v4)),
            None => Some(IpAddr::V6(v6)),
        },
        v4 => Some(v4),
    }
}

/// Parses a bare IPv4 literal such as an IP-echo endpoint body.
///
/// Only surrounding whitespace is tolerated.
pub fn parse_ipv4_literal(body: &str) -> Option<Ipv4Addr> {
    body.trim().parse::<Ipv4Addr>().ok()
}

/// Returns `true` if the address is publicly routable.
pub fn is_routable(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => !is_private_ipv4(v4),
        IpAddr::V6(v6) => !is_private_ipv6(v6),
    }
}

/// Checks if an IPv4 address is private, internal or otherwise unroutable.
///
/// Ranges:
/// - 0.0.0.0/8 (this network)
/// - 10.0.0.0/8, 172.16.0.0/12, 192.168.0.0/16 (RFC 1918)
/// - 100.64.0.0/10 (carrier-grade NAT)
/// - 127.0.0.0/8 (loopback)
/// - 169.254.0.0/16 (link-local)
/// - 224.0.0.0/4 (multicast)
/// - 240.0.0.0/4 (reserved, includes broadcast)
fn is_private_ipv4(ip: Ipv4Addr) -> bool {
    let octets = ip.octets();

    // 0.0.0.0/8 (this network)
    if octets[0] == 0 {
        return true;
    }

    // 10.0.0.0/8
    if octets[0] == 10 {
        return true;
    }

    // 100.64.0.0/10 (CGNAT)
    if octets[0] == 100 && (64..=127).contains(&octets[1]) {
        return true;
    }

    // 127.0.0.0/8 (loopback)
    if octets[0] == 127 {
        return true;
    }

    // 169.254.0.0/16 (link-local)
    if octets[0] == 169 && octets[1] == 254 {
        return true;
    }

    // 172.16.0.0/12
    if octets[0] == 172 && (16..=31).contains(&octets[1]) {
        return true;
    }

    // 192.168.0.0/16
    if octets[0] == 192 && octets[1] == 168 {
        return true;
    }

    // 224.0.0.0/4 (multicast) and 240.0.0.0/4 (reserved)
    octets[0] >= 224
}

/// Checks if an IPv6 address is private, internal or otherwise unroutable.
///
/// Ranges:
/// - :: (unspecified) and ::1 (loopback)
/// - fc00::/7 (unique local addresses)
/// - fe80::/10 (link-local)
/// - ff00::/8 (multicast)
fn is_private_ipv6(ip: Ipv6Addr) -> bool {
    let segments = ip.segments();

    if ip.is_unspecified() || ip.is_loopback() {
        return true;
    }

    // fc00::/7 (unique local addresses)
    if (segments[0] & 0xfe00) == 0xfc00 {
        return true;
    }

    // fe80::/10 (link-local)
    if (segments[0] & 0xffc0) == 0xfe80 {
        return true;
    }

    // ff00::/8 (multicast)
    segments[0] & 0xff00 == 0xff00
}
