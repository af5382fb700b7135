//! IP address representation shared by IPv4 and IPv6.
//!
//! An [`Address`] is a discriminated value: one variant per protocol version,
//! each wrapping the fixed-width std type. All bit arithmetic goes through
//! [`Address::to_bits`] / [`Address::from_bits`] and the width constants on
//! [`IpVersion`], so callers never branch on the textual shape again.

use itertools::Itertools;
use serde::Serialize;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::ValidationError;

/// Maximum prefix length for an IPv4 network (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length for an IPv6 network (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Protocol version of an address. Fixed for the whole of one calculation.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    /// Number of bits in an address of this version.
    pub fn bit_width(self) -> u8 {
        match self {
            IpVersion::V4 => MAX_LENGTH_V4,
            IpVersion::V6 => MAX_LENGTH_V6,
        }
    }

    /// All address bits set, as a `u128`.
    pub fn all_ones(self) -> u128 {
        match self {
            IpVersion::V4 => u32::MAX as u128,
            IpVersion::V6 => u128::MAX,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpVersion::V4 => write!(f, "IPv4"),
            IpVersion::V6 => write!(f, "IPv6"),
        }
    }
}

/// An IPv4 or IPv6 address.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Address {
    V4(Ipv4Addr),
    V6(Ipv6Addr),
}

impl Address {
    /// Build an address of `version` from its integer value. Bits above the
    /// version's width are dropped.
    pub fn from_bits(version: IpVersion, bits: u128) -> Address {
        match version {
            IpVersion::V4 => Address::V4(Ipv4Addr::from((bits & IpVersion::V4.all_ones()) as u32)),
            IpVersion::V6 => Address::V6(Ipv6Addr::from(bits)),
        }
    }

    /// Integer value of the address.
    pub fn to_bits(&self) -> u128 {
        match self {
            Address::V4(addr) => u32::from(*addr) as u128,
            Address::V6(addr) => u128::from(*addr),
        }
    }

    pub fn version(&self) -> IpVersion {
        match self {
            Address::V4(_) => IpVersion::V4,
            Address::V6(_) => IpVersion::V6,
        }
    }

    /// Full form without zero compression (`2001:0db8:0000:...`).
    /// IPv4 addresses have no separate exploded form.
    pub fn exploded(&self) -> String {
        match self {
            Address::V4(addr) => addr.to_string(),
            Address::V6(addr) => addr
                .segments()
                .iter()
                .map(|group| format!("{group:04x}"))
                .join(":"),
        }
    }
}

/// Zero-run compression of an IPv6 value.
///
/// The longest run of two or more zero groups becomes `::`; on a tie the
/// leftmost run wins. Groups are lowercase hex without leading zeros and an
/// embedded dotted quad is never produced.
pub fn compress_v6(bits: u128) -> String {
    let groups = Ipv6Addr::from(bits).segments();

    let mut best: Option<(usize, usize)> = None;
    let mut run_start = 0;
    let mut run_len = 0;
    for (i, group) in groups.iter().enumerate() {
        if *group == 0 {
            if run_len == 0 {
                run_start = i;
            }
            run_len += 1;
            if run_len >= 2 && best.map_or(true, |(_, len)| run_len > len) {
                best = Some((run_start, run_len));
            }
        } else {
            run_len = 0;
        }
    }

    let hex = |part: &[u16]| part.iter().map(|g| format!("{g:x}")).join(":");
    match best {
        Some((start, len)) => format!("{}::{}", hex(&groups[..start]), hex(&groups[start + len..])),
        None => hex(&groups),
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Address::V4(addr) => write!(f, "{addr}"),
            Address::V6(addr) => write!(f, "{}", compress_v6(u128::from(*addr))),
        }
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Mask bits for `len` leading ones. Callers guarantee `len <= bit_width`.
pub(crate) fn mask_bits(version: IpVersion, len: u8) -> u128 {
    debug_assert!(len <= version.bit_width());
    let right_len = (version.bit_width() - len) as u32;
    version.all_ones().checked_shl(right_len).unwrap_or(0) & version.all_ones()
}

/// Convert a prefix length to its netmask as an integer.
///
/// # Examples
/// ```
/// use ip_subnet_calc::models::{get_cidr_mask, IpVersion};
/// assert_eq!(get_cidr_mask(IpVersion::V4, 24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(version: IpVersion, len: u8) -> Result<u128, ValidationError> {
    if len > version.bit_width() {
        Err(ValidationError::InvalidMask(format!(
            "/{len} is longer than {} bits",
            version.bit_width()
        )))
    } else {
        Ok(mask_bits(version, len))
    }
}

/// Prefix length of a netmask, or `None` when its ones are not one leading run.
pub fn mask_to_prefix(version: IpVersion, mask: u128) -> Option<u8> {
    let all_ones = version.all_ones();
    if mask & !all_ones != 0 {
        return None;
    }
    let wildcard = !mask & all_ones;
    if wildcard & wildcard.wrapping_add(1) != 0 {
        return None;
    }
    Some(version.bit_width() - wildcard.count_ones() as u8)
}

/// Network address of `addr` for prefix `len` (host bits zeroed).
pub fn cut_addr(addr: Address, len: u8) -> Result<Address, ValidationError> {
    let mask = get_cidr_mask(addr.version(), len)?;
    Ok(Address::from_bits(addr.version(), addr.to_bits() & mask))
}

/// Last address of the range containing `addr` for prefix `len` (host bits set).
pub fn last_addr(addr: Address, len: u8) -> Result<Address, ValidationError> {
    let version = addr.version();
    let mask = get_cidr_mask(version, len)?;
    let wildcard = !mask & version.all_ones();
    Ok(Address::from_bits(version, (addr.to_bits() & mask) | wildcard))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v6(s: &str) -> u128 {
        u128::from(s.parse::<Ipv6Addr>().unwrap())
    }

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(IpVersion::V4, 0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(IpVersion::V4, 8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(IpVersion::V4, 16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(IpVersion::V4, 32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(IpVersion::V4, 33).is_err());

        assert_eq!(get_cidr_mask(IpVersion::V6, 0).unwrap(), 0);
        assert_eq!(get_cidr_mask(IpVersion::V6, 128).unwrap(), u128::MAX);
        assert_eq!(get_cidr_mask(IpVersion::V6, 64).unwrap(), u128::MAX << 64);
        assert!(get_cidr_mask(IpVersion::V6, 129).is_err());
    }

    #[test]
    fn test_mask_to_prefix() {
        assert_eq!(mask_to_prefix(IpVersion::V4, 0xFFFFFF00), Some(24));
        assert_eq!(mask_to_prefix(IpVersion::V4, 0), Some(0));
        assert_eq!(mask_to_prefix(IpVersion::V4, 0xFFFFFFFF), Some(32));
        // 255.255.0.255
        assert_eq!(mask_to_prefix(IpVersion::V4, 0xFFFF00FF), None);
        assert_eq!(mask_to_prefix(IpVersion::V4, 0x1_0000_0000), None);

        assert_eq!(mask_to_prefix(IpVersion::V6, u128::MAX), Some(128));
        assert_eq!(mask_to_prefix(IpVersion::V6, 0), Some(0));
        assert_eq!(mask_to_prefix(IpVersion::V6, v6("ffff:ffff:ffff::")), Some(48));
        assert_eq!(mask_to_prefix(IpVersion::V6, v6("ffff::ffff")), None);
    }

    #[test]
    fn test_cut_addr() {
        let ip = Address::V4(Ipv4Addr::new(192, 168, 1, 42));
        assert_eq!(cut_addr(ip, 24).unwrap().to_string(), "192.168.1.0");
        assert_eq!(cut_addr(ip, 16).unwrap().to_string(), "192.168.0.0");
        assert_eq!(cut_addr(ip, 32).unwrap(), ip);
        assert_eq!(cut_addr(ip, 0).unwrap().to_string(), "0.0.0.0");
        assert!(cut_addr(ip, 33).is_err());

        let ip6 = Address::from_bits(IpVersion::V6, v6("2001:db8:85a3::8a2e:370:7334"));
        assert_eq!(cut_addr(ip6, 48).unwrap().to_string(), "2001:db8:85a3::");
    }

    #[test]
    fn test_last_addr() {
        let ip = Address::V4(Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(last_addr(ip, 24).unwrap().to_string(), "192.168.1.255");
        assert_eq!(last_addr(ip, 8).unwrap().to_string(), "192.255.255.255");
        assert_eq!(last_addr(ip, 32).unwrap(), ip);
        assert_eq!(last_addr(ip, 0).unwrap().to_string(), "255.255.255.255");

        let ip6 = Address::from_bits(IpVersion::V6, v6("2001:db8::"));
        assert_eq!(
            last_addr(ip6, 32).unwrap().to_string(),
            "2001:db8:ffff:ffff:ffff:ffff:ffff:ffff"
        );
    }

    #[test]
    fn test_compress_v6() {
        assert_eq!(compress_v6(0), "::");
        assert_eq!(compress_v6(1), "::1");
        assert_eq!(compress_v6(v6("2001:db8:85a3::")), "2001:db8:85a3::");
        assert_eq!(
            compress_v6(v6("2001:0db8:85a3:0000:0000:8a2e:0370:7334")),
            "2001:db8:85a3::8a2e:370:7334"
        );
        // a single zero group is not compressed
        assert_eq!(compress_v6(v6("2001:db8:0:1:1:1:1:1")), "2001:db8:0:1:1:1:1:1");
        // leftmost run wins a tie
        assert_eq!(compress_v6(v6("1:0:0:2:3:0:0:4")), "1::2:3:0:0:4");
        // longest run wins over an earlier shorter one
        assert_eq!(compress_v6(v6("1:0:0:2:0:0:0:3")), "1:0:0:2::3");
        // no dotted quad for mapped addresses
        assert_eq!(compress_v6(v6("::ffff:192.0.2.1")), "::ffff:c000:201");
    }

    #[test]
    fn test_exploded() {
        let ip6 = Address::from_bits(IpVersion::V6, v6("2001:db8::1"));
        assert_eq!(ip6.exploded(), "2001:0db8:0000:0000:0000:0000:0000:0001");
        let ip4 = Address::V4(Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(ip4.exploded(), "10.0.0.1");
    }

    #[test]
    fn test_from_bits_truncates_v4() {
        let ip = Address::from_bits(IpVersion::V4, 0x1_C0A8_0101);
        assert_eq!(ip.to_string(), "192.168.1.1");
        assert_eq!(ip.version(), IpVersion::V4);
    }

    #[test]
    fn test_address_cmp() {
        let ip1 = Address::V4(Ipv4Addr::new(10, 0, 0, 1));
        let ip2 = Address::V4(Ipv4Addr::new(10, 0, 0, 2));
        assert!(ip1 < ip2);
        assert_eq!(ip1, Address::from_bits(IpVersion::V4, ip1.to_bits()));
    }

    #[test]
    fn test_serialize_as_string() {
        let addr = Address::from_bits(IpVersion::V6, v6("2001:db8:0:0:1::1"));
        assert_eq!(serde_json::to_string(&addr).unwrap(), "\"2001:db8::1:0:0:1\"");
        let addr = Address::V4(Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(serde_json::to_string(&addr).unwrap(), "\"192.168.1.0\"");
        assert_eq!(serde_json::to_string(&IpVersion::V6).unwrap(), "\"V6\"");
    }
}
