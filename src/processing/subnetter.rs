//! Subdivision of a network into equal children with a longer prefix.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use super::calculator::compute;
use crate::error::SubnetError;
use crate::models::{
    Address, NetworkDescriptor, SubnetPartition, SubnetSummary, ValidatedInput,
};

/// Largest number of children [`subdivide`] will materialize.
pub const DEFAULT_MAX_SUBNETS: u64 = 65_536;

/// Parse the new prefix text, e.g. `26` or `/26`, for subdividing `network`.
///
/// Non-integer text is [`SubnetError::InvalidPrefix`]; the range checks are the
/// same as for [`subdivide`].
pub fn parse_new_prefix(text: &str, network: &NetworkDescriptor) -> Result<u8, SubnetError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('/').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SubnetError::InvalidPrefix(text.to_string()));
    }
    let max = network.version().bit_width();
    match digits.parse::<u32>() {
        Ok(requested) if requested <= max as u32 => {
            let requested = requested as u8;
            check_new_prefix(network, requested)?;
            Ok(requested)
        }
        Ok(requested) => Err(SubnetError::PrefixOutOfRange { requested, max }),
        // more digits than fit in a u32
        Err(_) => Err(SubnetError::PrefixOutOfRange {
            requested: u32::MAX,
            max,
        }),
    }
}

fn check_new_prefix(network: &NetworkDescriptor, new_prefix: u8) -> Result<(), SubnetError> {
    if new_prefix <= network.prefix() {
        return Err(SubnetError::PrefixNotLonger {
            current: network.prefix(),
            requested: new_prefix,
        });
    }
    let max = network.version().bit_width();
    if new_prefix > max {
        return Err(SubnetError::PrefixOutOfRange {
            requested: new_prefix as u32,
            max,
        });
    }
    Ok(())
}

/// Exact number of children, 2^(new_prefix - prefix).
fn subnet_count(network: &NetworkDescriptor, new_prefix: u8) -> BigUint {
    BigUint::one() << (new_prefix - network.prefix()) as usize
}

/// Counts of a subdivision without enumerating it. Succeeds for any valid
/// prefix, however many children that implies.
pub fn summarize(
    network: &NetworkDescriptor,
    new_prefix: u8,
) -> Result<SubnetSummary, SubnetError> {
    check_new_prefix(network, new_prefix)?;
    let first_subnet = NetworkDescriptor::new(network.base_address(), new_prefix)
        .map_err(|_| SubnetError::PrefixOutOfRange {
            requested: new_prefix as u32,
            max: network.version().bit_width(),
        })?;
    Ok(SubnetSummary {
        parent: *network,
        new_prefix,
        subnet_count: subnet_count(network, new_prefix),
        addresses_per_subnet: first_subnet.size(),
        first_subnet,
    })
}

/// Subdivide with the default enumeration limit of [`DEFAULT_MAX_SUBNETS`].
pub fn subdivide(
    network: &NetworkDescriptor,
    new_prefix: u8,
) -> Result<SubnetPartition, SubnetError> {
    subdivide_with_limit(network, new_prefix, DEFAULT_MAX_SUBNETS)
}

/// Enumerate every child of `network` at `new_prefix`, in address order.
///
/// Fails with [`SubnetError::TooManySubnets`] when the child count is above
/// `limit`; a count equal to `limit` is enumerated.
pub fn subdivide_with_limit(
    network: &NetworkDescriptor,
    new_prefix: u8,
    limit: u64,
) -> Result<SubnetPartition, SubnetError> {
    check_new_prefix(network, new_prefix)?;

    let count_big = subnet_count(network, new_prefix);
    let too_many = |count: BigUint| {
        log::warn!(
            "Refusing to enumerate {count} subnets of {network} at /{new_prefix}, limit {limit}"
        );
        SubnetError::TooManySubnets { count, limit }
    };
    let count = match count_big.to_u64() {
        Some(count) if count <= limit => count,
        _ => return Err(too_many(count_big)),
    };

    // a caller supplied limit may allow more children than memory can hold
    let mut children = Vec::new();
    match usize::try_from(count) {
        Ok(len) if children.try_reserve_exact(len).is_ok() => {}
        _ => return Err(too_many(count_big)),
    }

    let version = network.version();
    // new_prefix > prefix >= 0, so the shift is at most 127
    let step = 1u128 << (version.bit_width() - new_prefix);
    let base = network.base_address().to_bits();

    for i in 0..count {
        let child = Address::from_bits(version, base + (i as u128) * step);
        log::trace!("subnet[{i}] = {child}/{new_prefix}");
        children.push(compute(&ValidatedInput::from_parts(child, new_prefix)));
    }

    log::debug!(
        "subdivide({network}, /{new_prefix}) -> {} subnets",
        children.len()
    );
    Ok(SubnetPartition {
        parent: *network,
        new_prefix,
        children,
    })
}
