//! Walk the equal-sized subnets of a classful network.

use crate::models::{ClassfulNetwork, Subnet};
use std::net::Ipv4Addr;

/// Iterator over the subnets of a classful network, lowest address first.
///
/// Each step covers one stride of `2^host_bits` addresses. A trailing
/// block that would overrun the classful broadcast is not emitted, so a
/// stride larger than the network yields nothing.
///
/// Cloning keeps the current position; a fresh walk over the whole
/// network comes from [`SubnetPlan::subnets`].
///
/// [`SubnetPlan::subnets`]: crate::processing::SubnetPlan::subnets
#[derive(Debug, Clone)]
pub struct SubnetWalk {
    // u64 so a stride covering the whole 32-bit space cannot wrap.
    next: u64,
    end: u64,
    stride: u64,
}

impl SubnetWalk {
    pub fn new(network: &ClassfulNetwork, host_bits: u8) -> SubnetWalk {
        SubnetWalk {
            next: u64::from(u32::from(network.network)),
            end: u64::from(u32::from(network.broadcast)),
            stride: 1u64 << host_bits,
        }
    }

    /// Subnets left to emit.
    pub fn remaining(&self) -> u64 {
        if self.next > self.end {
            return 0;
        }
        (self.end - self.next + 1) / self.stride
    }
}

impl Iterator for SubnetWalk {
    type Item = Subnet;

    fn next(&mut self) -> Option<Subnet> {
        let last = self.next + self.stride - 1;
        if last > self.end {
            return None;
        }
        let subnet = Subnet {
            network: Ipv4Addr::from(self.next as u32),
            broadcast: Ipv4Addr::from(last as u32),
        };
        self.next = last + 1;
        Some(subnet)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SubnetWalk {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn class_c_walk(host_bits: u8) -> SubnetWalk {
        let network = ClassfulNetwork::containing(Ipv4Addr::new(216, 21, 5, 0)).unwrap();
        SubnetWalk::new(&network, host_bits)
    }

    #[test]
    fn test_walk_class_c() {
        let subnets: Vec<Subnet> = class_c_walk(5).collect();
        assert_eq!(subnets.len(), 8);
        assert_eq!(subnets[0].network, Ipv4Addr::new(216, 21, 5, 0));
        assert_eq!(subnets[0].broadcast, Ipv4Addr::new(216, 21, 5, 31));
        assert_eq!(subnets[1].network, Ipv4Addr::new(216, 21, 5, 32));
        assert_eq!(subnets[7].network, Ipv4Addr::new(216, 21, 5, 224));
        assert_eq!(subnets[7].broadcast, Ipv4Addr::new(216, 21, 5, 255));
    }

    #[test]
    fn test_walk_is_contiguous() {
        for (a, b) in class_c_walk(5).tuple_windows() {
            assert_eq!(
                u32::from(b.network),
                u32::from(a.broadcast) + 1,
                "gap between {a} and {b}"
            );
        }
    }

    #[test]
    fn test_walk_single_subnet() {
        // host_bits equal to the class host portion emits the network itself.
        let subnets: Vec<Subnet> = class_c_walk(8).collect();
        assert_eq!(subnets.len(), 1);
        assert_eq!(subnets[0].network, Ipv4Addr::new(216, 21, 5, 0));
        assert_eq!(subnets[0].broadcast, Ipv4Addr::new(216, 21, 5, 255));
    }

    #[test]
    fn test_walk_stride_wider_than_network() {
        let subnets: Vec<Subnet> = class_c_walk(9).collect();
        assert!(subnets.is_empty());
    }

    #[test]
    fn test_walk_drops_partial_trailing_block() {
        // 10 addresses with a stride of 4 fit two whole blocks; the
        // 2-address remainder is not emitted.
        let walk = SubnetWalk {
            next: 0,
            end: 9,
            stride: 4,
        };
        let subnets: Vec<Subnet> = walk.collect();
        assert_eq!(subnets.len(), 2);
        assert_eq!(subnets[1].broadcast, Ipv4Addr::new(0, 0, 0, 7));
    }

    #[test]
    fn test_walk_clone_resumes_in_place() {
        let mut walk = class_c_walk(5);
        walk.next();
        walk.next();
        let resumed: Vec<Subnet> = walk.clone().collect();
        assert_eq!(resumed.len(), 6);
        let full: Vec<Subnet> = class_c_walk(5).collect();
        assert_eq!(resumed, full[2..]);
    }

    #[test]
    fn test_walk_size_hint() {
        let mut walk = class_c_walk(5);
        assert_eq!(walk.len(), 8);
        walk.next();
        assert_eq!(walk.size_hint(), (7, Some(7)));
        let rest: Vec<Subnet> = walk.collect();
        assert_eq!(rest.len(), 7);
    }
}
