//! The calculation result shared with every presentation collaborator.

use num_bigint::BigUint;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::address::{Address, IpVersion};
use super::network::{NetworkDescriptor, ValidatedInput};

/// Derived attributes of one network. Built only by the calculator and
/// read-only afterwards; equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultModel {
    pub(crate) version: IpVersion,
    pub(crate) original_input_address: Address,
    pub(crate) network_address: Address,
    pub(crate) prefix: u8,
    pub(crate) netmask: Address,
    pub(crate) wildcard_mask: Address,
    pub(crate) broadcast_address: Option<Address>,
    pub(crate) last_address: Address,
    pub(crate) total_addresses: BigUint,
    pub(crate) usable_addresses: BigUint,
    pub(crate) first_usable: Address,
    pub(crate) last_usable: Address,
}

impl ResultModel {
    pub fn version(&self) -> IpVersion {
        self.version
    }

    /// The address as entered, host bits intact.
    pub fn original_input_address(&self) -> Address {
        self.original_input_address
    }

    pub fn network_address(&self) -> Address {
        self.network_address
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn netmask(&self) -> Address {
        self.netmask
    }

    pub fn wildcard_mask(&self) -> Address {
        self.wildcard_mask
    }

    /// IPv4 only. IPv6 has no broadcast, use [`ResultModel::last_address`].
    pub fn broadcast_address(&self) -> Option<Address> {
        self.broadcast_address
    }

    /// Highest address of the range for either version.
    pub fn last_address(&self) -> Address {
        self.last_address
    }

    pub fn total_addresses(&self) -> &BigUint {
        &self.total_addresses
    }

    pub fn usable_addresses(&self) -> &BigUint {
        &self.usable_addresses
    }

    pub fn first_usable(&self) -> Address {
        self.first_usable
    }

    pub fn last_usable(&self) -> Address {
        self.last_usable
    }

    /// `/` followed by the prefix length.
    pub fn cidr_notation(&self) -> String {
        format!("/{}", self.prefix)
    }

    /// Network in `address/prefix` form, e.g. `192.168.1.0/24`.
    pub fn network_cidr(&self) -> String {
        format!("{}{}", self.network_address, self.cidr_notation())
    }

    pub fn network(&self) -> NetworkDescriptor {
        NetworkDescriptor::from_input(&ValidatedInput::from_parts(
            self.network_address,
            self.prefix,
        ))
    }
}

/// Serialize an arbitrary-precision count as a decimal string.
pub(crate) fn serialize_count<S>(count: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&count.to_str_radix(10))
}

struct Count<'a>(&'a BigUint);

impl Serialize for Count<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_count(self.0, serializer)
    }
}

impl Serialize for ResultModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ResultModel", 13)?;
        state.serialize_field("version", &self.version)?;
        state.serialize_field("original_input_address", &self.original_input_address)?;
        state.serialize_field("network_address", &self.network_address)?;
        state.serialize_field("cidr", &self.cidr_notation())?;
        state.serialize_field("netmask", &self.netmask)?;
        state.serialize_field("wildcard_mask", &self.wildcard_mask)?;
        match &self.broadcast_address {
            Some(broadcast) => state.serialize_field("broadcast_address", broadcast)?,
            None => state.skip_field("broadcast_address")?,
        }
        state.serialize_field("last_address", &self.last_address)?;
        state.serialize_field("total_addresses", &Count(&self.total_addresses))?;
        state.serialize_field("usable_addresses", &Count(&self.usable_addresses))?;
        state.serialize_field("first_usable", &self.first_usable)?;
        state.serialize_field("last_usable", &self.last_usable)?;
        state.end()
    }
}
