//! Subnet mask represented by its prefix length.

use crate::models::{binary_octets, MAX_LENGTH};
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

/// A contiguous subnet mask, stored as the number of leading one bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubnetMask {
    prefix_len: u8,
}

impl SubnetMask {
    /// # Panics
    ///
    /// Panics if `prefix_len` exceeds 32.
    pub fn new(prefix_len: u8) -> SubnetMask {
        assert!(
            prefix_len <= MAX_LENGTH,
            "prefix_len[{prefix_len}] > 32 should never happen."
        );
        SubnetMask { prefix_len }
    }

    /// Build a mask from a dotted address, if its bits are contiguous.
    ///
    /// Returns `None` for addresses like 255.0.255.0 where a zero bit
    /// sits above a one bit.
    pub fn from_addr(addr: Ipv4Addr) -> Option<SubnetMask> {
        let bits = u32::from(addr);
        let mask = SubnetMask::new(bits.leading_ones() as u8);
        (mask.bits() == bits).then_some(mask)
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Bits left over for host numbering under this mask.
    pub fn host_bits(&self) -> u8 {
        MAX_LENGTH - self.prefix_len
    }

    /// The mask as a `u32` with `prefix_len` leading ones.
    pub fn bits(&self) -> u32 {
        // Shift through u64 so a /0 mask clears all 32 bits instead of
        // hitting an overflowing shift.
        let right_len = u32::from(MAX_LENGTH - self.prefix_len);
        ((u32::MAX as u64 >> right_len) << right_len) as u32
    }

    /// The mask in dotted-decimal form.
    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.bits())
    }

    /// The mask as four dot-separated octets of binary digits.
    pub fn to_binary(&self) -> String {
        binary_octets(self.addr())
    }
}

impl fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.addr())
    }
}

// Serialize as the dotted string, which is what reports want to see.
impl Serialize for SubnetMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits() {
        assert_eq!(SubnetMask::new(0).bits(), 0x0000_0000);
        assert_eq!(SubnetMask::new(8).bits(), 0xFF00_0000);
        assert_eq!(SubnetMask::new(16).bits(), 0xFFFF_0000);
        assert_eq!(SubnetMask::new(24).bits(), 0xFFFF_FF00);
        assert_eq!(SubnetMask::new(27).bits(), 0xFFFF_FFE0);
        assert_eq!(SubnetMask::new(32).bits(), 0xFFFF_FFFF);
    }

    #[test]
    fn test_display_dotted() {
        assert_eq!(SubnetMask::new(23).to_string(), "255.255.254.0");
        assert_eq!(SubnetMask::new(27).to_string(), "255.255.255.224");
    }

    #[test]
    fn test_to_binary() {
        assert_eq!(
            SubnetMask::new(27).to_binary(),
            "11111111.11111111.11111111.11100000"
        );
        assert_eq!(
            SubnetMask::new(8).to_binary(),
            "11111111.00000000.00000000.00000000"
        );
    }

    #[test]
    fn test_host_bits() {
        assert_eq!(SubnetMask::new(27).host_bits(), 5);
        assert_eq!(SubnetMask::new(8).host_bits(), 24);
        assert_eq!(SubnetMask::new(32).host_bits(), 0);
    }

    #[test]
    fn test_from_addr_round_trip() {
        for prefix_len in 0..=MAX_LENGTH {
            let mask = SubnetMask::new(prefix_len);
            assert_eq!(SubnetMask::from_addr(mask.addr()), Some(mask));
        }
    }

    #[test]
    fn test_from_addr_rejects_gappy_mask() {
        assert_eq!(SubnetMask::from_addr(Ipv4Addr::new(255, 0, 255, 0)), None);
        assert_eq!(SubnetMask::from_addr(Ipv4Addr::new(0, 255, 0, 0)), None);
    }

    #[test]
    #[should_panic(expected = "prefix_len[33] > 32")]
    fn test_new_rejects_over_32() {
        SubnetMask::new(33);
    }
}
