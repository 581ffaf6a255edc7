//! Data types for classful subnet planning.
//!
//! * `class` ..... the A/B/C address classes and their default masks
//! * `ipv4` ...... address parsing and network/broadcast bit math
//! * `mask` ...... the `SubnetMask` prefix type
//! * `network` ... the classful network containing an address
//! * `subnet` .... one enumerated subnet range

mod class;
mod ipv4;
mod mask;
mod network;
mod subnet;

// Re-export public types
pub use class::AddressClass;
pub use ipv4::{binary_octets, broadcast_addr, network_addr, parse_address, MAX_LENGTH};
pub use mask::SubnetMask;
pub use network::ClassfulNetwork;
pub use subnet::Subnet;
