//! IPv4 address parsing and bit-level utilities.
//!
//! Everything here works on [`std::net::Ipv4Addr`]; mask handling lives in
//! [`super::SubnetMask`].

use crate::error::PlanError;
use crate::models::SubnetMask;
use itertools::Itertools;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Regex for the dotted-decimal shape; octet ranges are checked separately
/// so the error can say which octet is out of range.
static ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();

fn address_regex() -> &'static Regex {
    ADDRESS_REGEX.get_or_init(|| {
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").expect("Invalid Regex")
    })
}

/// Parse a dotted-decimal IPv4 address, reporting what is wrong with it.
///
/// Leading and trailing whitespace is ignored. A bad shape (not four
/// dot-separated octet groups) and an out-of-range octet produce distinct
/// [`PlanError::MalformedAddress`] reasons.
///
/// # Examples
/// ```
/// use classful_subnet_plan::models::parse_address;
/// assert_eq!(
///     parse_address(" 216.21.5.0 ").unwrap(),
///     std::net::Ipv4Addr::new(216, 21, 5, 0)
/// );
/// assert!(parse_address("216.21.5").is_err());
/// ```
pub fn parse_address(input: &str) -> Result<Ipv4Addr, PlanError> {
    let input = input.trim();
    let caps = address_regex()
        .captures(input)
        .ok_or_else(|| PlanError::MalformedAddress {
            input: input.to_string(),
            reason: "expected four dot-separated octets".to_string(),
        })?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let digits = &caps[i + 1];
        *octet = digits.parse().map_err(|_| PlanError::MalformedAddress {
            input: input.to_string(),
            reason: format!("octet {} is {digits}, outside 0-255", i + 1),
        })?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Network address of `addr` under `mask` (host bits cleared).
pub fn network_addr(addr: Ipv4Addr, mask: SubnetMask) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & mask.bits())
}

/// Broadcast address of `addr` under `mask` (host bits set).
pub fn broadcast_addr(addr: Ipv4Addr, mask: SubnetMask) -> Ipv4Addr {
    Ipv4Addr::from((u32::from(addr) & mask.bits()) | !mask.bits())
}

/// Render an address as four 8-bit binary groups, e.g.
/// `"11000000.10101000.00000001.00000000"` for 192.168.1.0.
pub fn binary_octets(addr: Ipv4Addr) -> String {
    addr.octets()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        assert_eq!(
            parse_address("216.21.5.0").unwrap(),
            Ipv4Addr::new(216, 21, 5, 0)
        );
        assert_eq!(
            parse_address("  10.0.0.0\n").unwrap(),
            Ipv4Addr::new(10, 0, 0, 0)
        );
        assert_eq!(parse_address("0.0.0.0").unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(
            parse_address("255.255.255.255").unwrap(),
            Ipv4Addr::new(255, 255, 255, 255)
        );
    }

    #[test]
    fn test_parse_address_bad_shape() {
        for input in ["", "10.0.0", "10.0.0.0.0", "a.b.c.d", "10,0,0,0", "10.0.0.-1"] {
            let err = parse_address(input).unwrap_err();
            assert_eq!(
                err,
                PlanError::MalformedAddress {
                    input: input.to_string(),
                    reason: "expected four dot-separated octets".to_string(),
                },
                "input {input:?} should fail the shape check"
            );
        }
    }

    #[test]
    fn test_parse_address_octet_out_of_range() {
        let err = parse_address("256.1.1.1").unwrap_err();
        assert_eq!(
            err,
            PlanError::MalformedAddress {
                input: "256.1.1.1".to_string(),
                reason: "octet 1 is 256, outside 0-255".to_string(),
            }
        );

        let err = parse_address("10.0.0.300").unwrap_err();
        assert_eq!(
            err,
            PlanError::MalformedAddress {
                input: "10.0.0.300".to_string(),
                reason: "octet 4 is 300, outside 0-255".to_string(),
            }
        );
    }

    #[test]
    fn test_network_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(
            network_addr(ip, SubnetMask::new(24)),
            Ipv4Addr::new(192, 168, 1, 0)
        );
        assert_eq!(
            network_addr(ip, SubnetMask::new(16)),
            Ipv4Addr::new(192, 168, 0, 0)
        );
        assert_eq!(
            network_addr(ip, SubnetMask::new(8)),
            Ipv4Addr::new(192, 0, 0, 0)
        );
        assert_eq!(
            network_addr(ip, SubnetMask::new(32)),
            Ipv4Addr::new(192, 168, 1, 42)
        );
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, SubnetMask::new(24)),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, SubnetMask::new(16)),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, SubnetMask::new(8)),
            Ipv4Addr::new(192, 255, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, SubnetMask::new(32)),
            Ipv4Addr::new(192, 168, 1, 0)
        );
    }

    #[test]
    fn test_binary_octets() {
        assert_eq!(
            binary_octets(Ipv4Addr::new(0, 0, 0, 0)),
            "00000000.00000000.00000000.00000000"
        );
        assert_eq!(
            binary_octets(Ipv4Addr::new(255, 255, 255, 224)),
            "11111111.11111111.11111111.11100000"
        );
        assert_eq!(
            binary_octets(Ipv4Addr::new(192, 168, 1, 0)),
            "11000000.10101000.00000001.00000000"
        );
    }
}
