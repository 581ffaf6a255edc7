//! Error types for the subnetting pipeline.
//!
//! Every stage fails fast with a typed error carrying the offending input;
//! once a stage fails, nothing downstream runs and no partial report is
//! printed.

use crate::models::AddressClass;
use thiserror::Error;

/// Errors raised while computing a subnetting plan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The address string is not four dot-separated octets each in 0-255.
    #[error("malformed IPv4 address {input:?}: {reason}")]
    MalformedAddress { input: String, reason: String },

    /// First octet outside the classful A/B/C ranges (0, 127, or 224 up).
    #[error("first octet {0} has no address class, so no default mask exists")]
    UnknownClass(u8),

    /// The requested host count cannot fit in a 32-bit address space.
    #[error("{0} hosts per subnet would need more than 32 host bits")]
    InvalidHostCount(u32),

    /// The derived mask would be less specific than the class default.
    #[error("new /{subnet_bits} mask is less specific than the class {class} default /{default_prefix}")]
    MaskUnderflow {
        class: AddressClass,
        subnet_bits: u8,
        default_prefix: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = PlanError::MalformedAddress {
            input: "10.0.0".to_string(),
            reason: "expected four dot-separated octets".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed IPv4 address \"10.0.0\": expected four dot-separated octets"
        );

        assert_eq!(
            PlanError::UnknownClass(127).to_string(),
            "first octet 127 has no address class, so no default mask exists"
        );

        assert_eq!(
            PlanError::MaskUnderflow {
                class: AddressClass::C,
                subnet_bits: 23,
                default_prefix: 24,
            }
            .to_string(),
            "new /23 mask is less specific than the class C default /24"
        );
    }
}
