//! Results of subdividing a network into a longer prefix.

use num_bigint::BigUint;
use serde::Serialize;

use super::network::NetworkDescriptor;
use super::result::{serialize_count, ResultModel};

/// A fully enumerated subdivision. Children are contiguous, in strictly
/// increasing address order, and together cover exactly the parent range.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetPartition {
    pub(crate) parent: NetworkDescriptor,
    pub(crate) new_prefix: u8,
    pub(crate) children: Vec<ResultModel>,
}

impl SubnetPartition {
    pub fn parent(&self) -> &NetworkDescriptor {
        &self.parent
    }

    pub fn new_prefix(&self) -> u8 {
        self.new_prefix
    }

    pub fn children(&self) -> &[ResultModel] {
        &self.children
    }

    /// Number of child subnets, 2^(new_prefix - parent prefix).
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Size of each child subnet.
    pub fn addresses_per_subnet(&self) -> BigUint {
        BigUint::from(1u8) << (self.parent.version().bit_width() - self.new_prefix) as usize
    }
}

/// Counts for a subdivision, computed without enumerating the children.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetSummary {
    pub(crate) parent: NetworkDescriptor,
    pub(crate) new_prefix: u8,
    #[serde(serialize_with = "serialize_count")]
    pub(crate) subnet_count: BigUint,
    #[serde(serialize_with = "serialize_count")]
    pub(crate) addresses_per_subnet: BigUint,
    pub(crate) first_subnet: NetworkDescriptor,
}

impl SubnetSummary {
    pub fn parent(&self) -> &NetworkDescriptor {
        &self.parent
    }

    pub fn new_prefix(&self) -> u8 {
        self.new_prefix
    }

    pub fn subnet_count(&self) -> &BigUint {
        &self.subnet_count
    }

    pub fn addresses_per_subnet(&self) -> &BigUint {
        &self.addresses_per_subnet
    }

    /// Lowest child subnet of the subdivision.
    pub fn first_subnet(&self) -> &NetworkDescriptor {
        &self.first_subnet
    }
}
