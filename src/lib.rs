// cargo watch -x 'fmt' -x 'run -- 216.21.5.0 30'

//! Classful IPv4 subnetting planner.
//!
//! Resolves an address's class and default mask, sizes the smallest
//! subnet mask that fits a required host count, and enumerates every
//! resulting subnet of the classful network.

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::PlanError;
pub use processing::{compute_plan, SubnetPlan};

/// Plan the subnetting of the network containing `address` so every
/// subnet holds `required_hosts` hosts.
///
/// ```
/// let plan = classful_subnet_plan::plan_subnets("216.21.5.0", 30).unwrap();
/// assert_eq!(plan.new_mask.to_string(), "255.255.255.224");
/// assert_eq!(plan.subnet_count, 8);
/// ```
pub fn plan_subnets(address: &str, required_hosts: u32) -> Result<SubnetPlan, PlanError> {
    let address = models::parse_address(address)?;
    compute_plan(address, required_hosts)
}
