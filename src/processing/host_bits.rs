//! Host bit-width needed for a requested subnet size.

use crate::error::PlanError;
use crate::models::MAX_LENGTH;

/// Smallest number of host bits whose block holds `required_hosts` usable
/// addresses.
///
/// Fails with [`PlanError::InvalidHostCount`] when no 32-bit block is big
/// enough.
pub fn bits_for_hosts(required_hosts: u32) -> Result<u8, PlanError> {
    // +2 for the network and broadcast addresses of each subnet.
    let needed = u64::from(required_hosts) + 2;
    let bits = ceil_log2(needed);
    if bits > u32::from(MAX_LENGTH) {
        return Err(PlanError::InvalidHostCount(required_hosts));
    }
    Ok(bits as u8)
}

/// Smallest `b` with `2^b >= n`. `n` must be nonzero.
fn ceil_log2(n: u64) -> u32 {
    if n <= 1 {
        0
    } else {
        (n - 1).ilog2() + 1
    }
}
