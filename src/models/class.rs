//! Historical IPv4 address classes.

use crate::error::PlanError;
use crate::models::SubnetMask;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// The classful address ranges A, B and C with their fixed default masks.
///
/// Addresses outside these ranges (first octet 0, the 127 loopback block,
/// or 224 and above) have no default mask; resolving them is an error, not
/// a fourth variant, so nothing downstream can run without a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddressClass {
    A,
    B,
    C,
}

impl AddressClass {
    /// Resolve the class of an address from its first octet.
    ///
    /// [1,126] is A, [128,191] is B, [192,223] is C; everything else fails
    /// with [`PlanError::UnknownClass`].
    pub fn of(addr: Ipv4Addr) -> Result<AddressClass, PlanError> {
        match addr.octets()[0] {
            1..=126 => Ok(AddressClass::A),
            128..=191 => Ok(AddressClass::B),
            192..=223 => Ok(AddressClass::C),
            first => Err(PlanError::UnknownClass(first)),
        }
    }

    /// Leading one bits of the class default mask (A=8, B=16, C=24).
    pub fn default_prefix(&self) -> u8 {
        match self {
            AddressClass::A => 8,
            AddressClass::B => 16,
            AddressClass::C => 24,
        }
    }

    /// The class default mask: 255.0.0.0, 255.255.0.0 or 255.255.255.0.
    pub fn default_mask(&self) -> SubnetMask {
        SubnetMask::new(self.default_prefix())
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
        };
        write!(f, "{letter}")
    }
}
