//! Domain models for the subnet calculator.
//!
//! This module contains the value types shared by the engine and its callers:
//! - [`Address`] and [`IpVersion`] - version-tagged address with mask helpers
//! - [`ValidatedInput`] and [`NetworkDescriptor`] - parser output and normalized network
//! - [`ResultModel`] - derived attributes of one network
//! - [`SubnetPartition`] and [`SubnetSummary`] - subdivision results

mod address;
mod network;
mod partition;
mod result;

// Re-export public types
pub use address::{
    compress_v6, cut_addr, get_cidr_mask, last_addr, mask_to_prefix, Address, IpVersion,
    MAX_LENGTH_V4, MAX_LENGTH_V6,
};
pub(crate) use address::mask_bits;
pub use network::{NetworkDescriptor, ValidatedInput};
pub use partition::{SubnetPartition, SubnetSummary};
pub use result::ResultModel;
