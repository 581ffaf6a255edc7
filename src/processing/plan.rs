//! Assemble the full subnetting plan for an address and host count.

use crate::error::PlanError;
use crate::models::{AddressClass, ClassfulNetwork, SubnetMask};
use crate::processing::{bits_for_hosts, derive_mask, SubnetWalk};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything derived from one address and one required host count.
///
/// The subnets themselves are not stored; [`SubnetPlan::subnets`] walks
/// them on demand, so a class A plan with tens of thousands of subnets
/// stays small.
#[derive(Debug, Clone, Serialize)]
pub struct SubnetPlan {
    pub address: Ipv4Addr,
    pub required_hosts: u32,
    pub class: AddressClass,
    pub default_mask: SubnetMask,
    pub host_bits: u8,
    pub new_mask: SubnetMask,
    pub borrowed_bits: u8,
    pub host_per_network: u64,
    pub host_per_subnet: u64,
    pub usable_per_subnet: u64,
    pub subnet_count: u64,
    pub network: ClassfulNetwork,
}

impl SubnetPlan {
    /// Walk the plan's subnets, lowest address first.
    pub fn subnets(&self) -> SubnetWalk {
        SubnetWalk::new(&self.network, self.host_bits)
    }

    /// Address stride between consecutive subnet network addresses.
    pub fn stride(&self) -> u64 {
        self.host_per_subnet
    }
}

/// Compute the subnetting plan for `address` and `required_hosts`.
///
/// Resolves the address class, sizes the host portion, derives the new
/// mask and locates the classful network. Any failure along the way
/// aborts the whole plan.
pub fn compute_plan(address: Ipv4Addr, required_hosts: u32) -> Result<SubnetPlan, PlanError> {
    log::info!("#Start compute_plan() address={address} required_hosts={required_hosts}");
    let network = ClassfulNetwork::containing(address)?;
    let host_bits = bits_for_hosts(required_hosts)?;
    let derived = derive_mask(network.class, host_bits)?;
    log::debug!(
        "plan: class={} new_mask={} subnet_count={}",
        network.class,
        derived.new_mask,
        derived.subnet_count
    );
    Ok(SubnetPlan {
        address,
        required_hosts,
        class: network.class,
        default_mask: network.class.default_mask(),
        host_bits,
        new_mask: derived.new_mask,
        borrowed_bits: derived.borrowed_bits,
        host_per_network: derived.host_per_network,
        host_per_subnet: derived.host_per_subnet,
        usable_per_subnet: derived.host_per_subnet - 2,
        subnet_count: derived.subnet_count,
        network,
    })
}
