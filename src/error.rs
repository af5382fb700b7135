//! Error types for address parsing and subnetting.
//!
//! Every failure is recoverable and deterministic: the same input always gives
//! the same error, and nothing is retained between calls.

use num_bigint::BigUint;
use thiserror::Error;

use crate::models::IpVersion;

/// Errors from parsing an address and mask pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Wrong octet/group count, out of range value, or unparseable text.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Mask out of range for the address version, or not a contiguous run of ones.
    #[error("invalid mask: {0}")]
    InvalidMask(String),

    /// Mask syntax belongs to the other IP version.
    #[error("mask '{mask}' cannot be used with an {address} address")]
    VersionMismatch { address: IpVersion, mask: String },
}

/// Errors from subdividing a network into a longer prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    #[error("new prefix /{requested} must be longer than the current /{current}")]
    PrefixNotLonger { current: u8, requested: u8 },

    #[error("new prefix /{requested} exceeds the maximum of /{max}")]
    PrefixOutOfRange { requested: u32, max: u8 },

    /// The subdivision is valid but too large to enumerate. `count` is exact.
    #[error("{count} subnets exceed the enumeration limit of {limit}")]
    TooManySubnets { count: BigUint, limit: u64 },

    /// New prefix text is not a non-negative integer.
    #[error("invalid new prefix: '{0}'")]
    InvalidPrefix(String),
}
