//! Derive the new subnet mask from a class and a host bit-width.

use crate::error::PlanError;
use crate::models::{AddressClass, SubnetMask, MAX_LENGTH};

/// The new mask plus the size metrics that fall out of the derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskDerivation {
    pub new_mask: SubnetMask,
    /// Network bits taken from the class's host portion.
    pub borrowed_bits: u8,
    /// Addresses in the whole classful network, 2^(32 - default prefix).
    pub host_per_network: u64,
    /// Addresses in each subnet, 2^host_bits.
    pub host_per_subnet: u64,
    /// Equal subnets the network splits into, 2^borrowed_bits.
    pub subnet_count: u64,
}

/// Derive the subnet mask that leaves `host_bits` bits for hosts.
///
/// Fails with [`PlanError::MaskUnderflow`] when the mask would be shorter
/// than the class default, meaning the class network cannot hold even one
/// subnet of the requested size.
///
/// # Panics
///
/// Panics if `host_bits` exceeds 32; [`bits_for_hosts`] never returns such
/// a value.
///
/// [`bits_for_hosts`]: crate::processing::bits_for_hosts
pub fn derive_mask(class: AddressClass, host_bits: u8) -> Result<MaskDerivation, PlanError> {
    assert!(
        host_bits <= MAX_LENGTH,
        "host_bits[{host_bits}] > 32 should never happen."
    );
    let subnet_bits = MAX_LENGTH - host_bits;
    let default_prefix = class.default_prefix();
    if subnet_bits < default_prefix {
        return Err(PlanError::MaskUnderflow {
            class,
            subnet_bits,
            default_prefix,
        });
    }
    let borrowed_bits = subnet_bits - default_prefix;
    Ok(MaskDerivation {
        new_mask: SubnetMask::new(subnet_bits),
        borrowed_bits,
        host_per_network: 1u64 << (MAX_LENGTH - default_prefix),
        host_per_subnet: 1u64 << host_bits,
        subnet_count: 1u64 << borrowed_bits,
    })
}
