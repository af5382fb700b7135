//! IPv4/IPv6 subnet calculator.
//!
//! Pure functions from address text to network attributes and subnet
//! breakdowns. Nothing here holds state between calls, reads the environment
//! or touches the filesystem.
//!
//! ```
//! let input = ip_subnet_calc::parse_and_validate("192.168.1.1", "255.255.255.0").unwrap();
//! let result = ip_subnet_calc::calculate(&input);
//! assert_eq!(result.network_cidr(), "192.168.1.0/24");
//!
//! let partition = ip_subnet_calc::subnet(&result, "26").unwrap();
//! assert_eq!(partition.len(), 4);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{SubnetError, ValidationError};
pub use models::{
    Address, IpVersion, NetworkDescriptor, ResultModel, SubnetPartition, SubnetSummary,
    ValidatedInput,
};
pub use processing::DEFAULT_MAX_SUBNETS;

/// Parse an address and a mask (prefix count, dotted-decimal or colon-hex).
pub fn parse_and_validate(
    address_text: &str,
    mask_text: &str,
) -> Result<ValidatedInput, ValidationError> {
    processing::parse(address_text, mask_text)
}

/// Compute every network attribute for validated input.
pub fn calculate(input: &ValidatedInput) -> ResultModel {
    processing::compute(input)
}

/// Subdivide the network of `result` into children of the new prefix.
pub fn subnet(result: &ResultModel, new_prefix_text: &str) -> Result<SubnetPartition, SubnetError> {
    subnet_with_limit(result, new_prefix_text, DEFAULT_MAX_SUBNETS)
}

/// As [`subnet`], with a caller supplied enumeration ceiling.
pub fn subnet_with_limit(
    result: &ResultModel,
    new_prefix_text: &str,
    limit: u64,
) -> Result<SubnetPartition, SubnetError> {
    let network = result.network();
    let new_prefix = processing::parse_new_prefix(new_prefix_text, &network)?;
    processing::subdivide_with_limit(&network, new_prefix, limit)
}

/// Subnet counts for the new prefix without enumerating the children.
pub fn summarize(
    result: &ResultModel,
    new_prefix_text: &str,
) -> Result<SubnetSummary, SubnetError> {
    let network = result.network();
    let new_prefix = processing::parse_new_prefix(new_prefix_text, &network)?;
    processing::summarize(&network, new_prefix)
}
