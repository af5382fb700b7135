//! Validated input and normalized network descriptors.

use num_bigint::BigUint;
use num_traits::One;
use serde::Serialize;
use std::fmt;

use super::address::{cut_addr, last_addr, mask_bits, Address, IpVersion};
use crate::error::ValidationError;

/// An address and prefix that passed validation.
///
/// The address is kept as typed by the user; host bits are not cleared.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedInput {
    address: Address,
    prefix: u8,
}

impl ValidatedInput {
    /// Pair an address with a prefix, rejecting prefixes longer than the
    /// address width.
    pub fn new(address: Address, prefix: u8) -> Result<ValidatedInput, ValidationError> {
        if prefix > address.version().bit_width() {
            return Err(ValidationError::InvalidMask(format!(
                "/{prefix} is out of range for {}",
                address.version()
            )));
        }
        Ok(ValidatedInput { address, prefix })
    }

    /// Callers guarantee `prefix <= bit_width`.
    pub(crate) fn from_parts(address: Address, prefix: u8) -> ValidatedInput {
        debug_assert!(prefix <= address.version().bit_width());
        ValidatedInput { address, prefix }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn version(&self) -> IpVersion {
        self.address.version()
    }
}

/// A network as (version, base address, prefix) with the host bits of the
/// base address always zero.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkDescriptor {
    version: IpVersion,
    base_address: Address,
    prefix: u8,
}

impl NetworkDescriptor {
    /// Normalize `address` to the network containing it.
    pub fn new(address: Address, prefix: u8) -> Result<NetworkDescriptor, ValidationError> {
        let base_address = cut_addr(address, prefix)?;
        Ok(NetworkDescriptor {
            version: address.version(),
            base_address,
            prefix,
        })
    }

    pub(crate) fn from_input(input: &ValidatedInput) -> NetworkDescriptor {
        let version = input.version();
        let bits = input.address().to_bits() & mask_bits(version, input.prefix());
        NetworkDescriptor {
            version,
            base_address: Address::from_bits(version, bits),
            prefix: input.prefix(),
        }
    }

    pub fn version(&self) -> IpVersion {
        self.version
    }

    pub fn base_address(&self) -> Address {
        self.base_address
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Highest address of the range (all host bits one).
    pub fn last_address(&self) -> Address {
        // prefix was range checked on construction
        last_addr(self.base_address, self.prefix).unwrap_or(self.base_address)
    }

    /// Number of addresses covered, 2^(bit_width - prefix).
    pub fn size(&self) -> BigUint {
        BigUint::one() << (self.version.bit_width() - self.prefix) as usize
    }
}

impl fmt::Display for NetworkDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.base_address, self.prefix)
    }
}
