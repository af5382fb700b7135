//! Network attribute calculation.
//!
//! Total over validated input: every [`ValidatedInput`] yields a [`ResultModel`].

use num_bigint::BigUint;
use num_traits::One;

use crate::models::{mask_bits, Address, IpVersion, ResultModel, ValidatedInput};

/// Derive every attribute of the network containing `input`.
///
/// IPv4 usable range: network and broadcast are reserved up to /30, a /31 is
/// a point-to-point link with both addresses usable (RFC 3021), and a /32 is
/// a single host. IPv6 reserves nothing.
pub fn compute(input: &ValidatedInput) -> ResultModel {
    let version = input.version();
    let prefix = input.prefix();
    let width = version.bit_width();

    let netmask = mask_bits(version, prefix);
    let wildcard = !netmask & version.all_ones();
    let network = input.address().to_bits() & netmask;
    let last = network | wildcard;

    let total_addresses = BigUint::one() << (width - prefix) as usize;

    let (usable_addresses, first_usable, last_usable) = match version {
        IpVersion::V4 => match prefix {
            32 => (BigUint::one(), network, network),
            31 => (BigUint::from(2u8), network, last),
            _ => (&total_addresses - 2u32, network + 1, last - 1),
        },
        IpVersion::V6 => (total_addresses.clone(), network, last),
    };

    let addr = |bits: u128| Address::from_bits(version, bits);
    let result = ResultModel {
        version,
        original_input_address: input.address(),
        network_address: addr(network),
        prefix,
        netmask: addr(netmask),
        wildcard_mask: addr(wildcard),
        broadcast_address: match version {
            IpVersion::V4 => Some(addr(last)),
            IpVersion::V6 => None,
        },
        last_address: addr(last),
        total_addresses,
        usable_addresses,
        first_usable: addr(first_usable),
        last_usable: addr(last_usable),
    };
    log::debug!(
        "compute({}/{prefix}) -> {} usable={}",
        input.address(),
        result.network_cidr(),
        result.usable_addresses
    );
    result
}
