//! One subnet inside a classful network.

use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// A subnet as its first and last address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subnet {
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
}

impl Subnet {
    /// Total addresses from network to broadcast inclusive.
    pub fn address_count(&self) -> u64 {
        u64::from(u32::from(self.broadcast)) - u64::from(u32::from(self.network)) + 1
    }

    /// Addresses assignable to hosts, after the network and broadcast
    /// addresses are set aside.
    pub fn usable_hosts(&self) -> u64 {
        self.address_count().saturating_sub(2)
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.network, self.broadcast)
    }
}
