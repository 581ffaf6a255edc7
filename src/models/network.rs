//! The classful network that contains a given address.

use crate::error::PlanError;
use crate::models::{broadcast_addr, network_addr, AddressClass};
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// An address's classful network under its class default mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassfulNetwork {
    pub class: AddressClass,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
}

impl ClassfulNetwork {
    /// Resolve the classful network containing `addr`.
    ///
    /// Fails with [`PlanError::UnknownClass`] when the first octet falls
    /// outside classes A, B and C.
    pub fn containing(addr: Ipv4Addr) -> Result<ClassfulNetwork, PlanError> {
        let class = AddressClass::of(addr)?;
        let mask = class.default_mask();
        Ok(ClassfulNetwork {
            class,
            network: network_addr(addr, mask),
            broadcast: broadcast_addr(addr, mask),
        })
    }

    /// Total addresses from network to broadcast inclusive.
    pub fn address_count(&self) -> u64 {
        u64::from(u32::from(self.broadcast)) - u64::from(u32::from(self.network)) + 1
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.network && ip <= self.broadcast
    }
}

impl fmt::Display for ClassfulNetwork {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.class.default_prefix())
    }
}
