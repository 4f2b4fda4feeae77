//! Privacy-safe address truncation.

use std::net::IpAddr;

use super::address::parse_ip;

/// Truncates an address for storage and logging.
///
/// IPv4 keeps the /24 network (`203.0.113.0/24`); IPv6 keeps the first four
/// hextets (`2001:db8:1:2::/64`). IPv4-mapped IPv6 input is treated as IPv4
/// and zone indices are ignored. Unparseable input yields an empty string.
///
/// # Examples
///
/// ```
/// use region_verify::net::mask_ip;
///
/// assert_eq!(mask_ip("203.0.113.7"), "203.0.113.0/24");
/// assert_eq!(mask_ip("2001:db8:1:2:3:4:5:6"), "2001:db8:1:2::/64");
/// assert_eq!(mask_ip("not-an-ip"), "");
/// ```
pub fn mask_ip(raw: &str) -> String {
    match parse_ip(raw) {
        Some(IpAddr::V4(v4)) => {
            let o = v4.octets();
            format!("{}.{}.{}.0/24", o[0], o[1], o[2])
        }
        Some(IpAddr::V6(v6)) => {
            let s = v6.segments();
            format!("{:x}:{:x}:{:x}:{:x}::/64", s[0], s[1], s[2], s[3])
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_ipv4() {
        assert_eq!(mask_ip("203.0.113.7"), "203.0.113.0/24");
        assert_eq!(mask_ip("8.8.8.8"), "8.8.8.0/24");
        assert_eq!(mask_ip(" 10.1.2.3 "), "10.1.2.0/24");
    }

    #[test]
    fn test_mask_ipv6() {
        assert_eq!(mask_ip("2001:db8:1:2:3:4:5:6"), "2001:db8:1:2::/64");
        assert_eq!(
            mask_ip("2001:0DB8:0001:0002:0000:0000:0000:0001"),
            "2001:db8:1:2::/64"
        );
        assert_eq!(mask_ip("2001:db8::1"), "2001:db8:0:0::/64");
    }

    #[test]
    fn test_mask_ipv4_mapped_and_zone() {
        assert_eq!(mask_ip("::ffff:203.0.113.7"), "203.0.113.0/24");
        assert_eq!(mask_ip("::FFFF:198.51.100.9"), "198.51.100.0/24");
        assert_eq!(mask_ip("fe80::1:2:3:4%eth0"), "fe80:0:0:0::/64");
    }

    #[test]
    fn test_mask_unparseable() {
        assert_eq!(mask_ip("not-an-ip"), "");
        assert_eq!(mask_ip(""), "");
        assert_eq!(mask_ip("1.2.3"), "");
        assert_eq!(mask_ip("999.1.1.1"), "");
    }
}
