//! Subnet planning calculations.
//!
//! * `host_bits` ... size the host portion for a required host count
//! * `derive` ...... derive the new mask and its size metrics
//! * `enumerate` ... walk the resulting subnets
//! * `plan` ........ tie the steps together into one `SubnetPlan`

mod derive;
mod enumerate;
mod host_bits;
mod plan;

// Re-export public functions
pub use derive::{derive_mask, MaskDerivation};
pub use enumerate::SubnetWalk;
pub use host_bits::bits_for_hosts;
pub use plan::{compute_plan, SubnetPlan};
