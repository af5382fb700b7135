//! Address and mask parsing.
//!
//! Turns the two text fields into a [`ValidatedInput`]. The address decides
//! the version (`:` means IPv6); the mask may be a prefix count (`24`, `/24`),
//! a dotted-decimal netmask (IPv4 only) or a colon-hex netmask (IPv6 only).

use lazy_static::lazy_static;
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::models::{mask_to_prefix, Address, IpVersion, ValidatedInput};

lazy_static! {
    static ref PREFIX_RE: Regex = Regex::new(r"^/?(?P<len>[0-9]{1,3})$").expect("Invalid Regex?");
    static ref DOTTED_RE: Regex = Regex::new(r"^[0-9]+(?:\.[0-9]+){3}$").expect("Invalid Regex?");
    static ref COLON_HEX_RE: Regex =
        Regex::new(r"^[0-9A-Fa-f:.]*:[0-9A-Fa-f:.]*$").expect("Invalid Regex?");
    static ref CIDR_RE: Regex =
        Regex::new(r"^(?P<addr>[^/\s]+)/(?P<len>[^/\s]+)$").expect("Invalid Regex?");
}

/// Parse and validate an address with its mask.
pub fn parse(address_text: &str, mask_text: &str) -> Result<ValidatedInput, ValidationError> {
    let address = parse_address(address_text)?;
    let prefix = parse_mask(mask_text, address.version())?;
    log::debug!(
        "parse({address_text}, {mask_text}) -> {address}/{prefix} {}",
        address.version()
    );
    ValidatedInput::new(address, prefix)
}

/// Parse an address on its own, detecting the version from its syntax.
pub fn parse_address(text: &str) -> Result<Address, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::InvalidAddress(
            "an IP address is required".to_string(),
        ));
    }
    if text.contains(':') {
        Ipv6Addr::from_str(text).map(Address::V6).map_err(|_| {
            ValidationError::InvalidAddress(format!("'{text}' is not an IPv6 address"))
        })
    } else {
        parse_dotted(text)
            .map(Address::V4)
            .map_err(|reason| ValidationError::InvalidAddress(format!("'{text}' {reason}")))
    }
}

/// Parse a mask for an address of `version` and return its prefix length.
pub fn parse_mask(text: &str, version: IpVersion) -> Result<u8, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::InvalidMask(
            "a subnet mask or prefix is required".to_string(),
        ));
    }

    if let Some(caps) = PREFIX_RE.captures(text) {
        let len: u8 = caps["len"]
            .parse()
            .map_err(|_| ValidationError::InvalidMask(format!("'{text}' is out of range")))?;
        if len > version.bit_width() {
            return Err(ValidationError::InvalidMask(format!(
                "/{len} is out of range for {version} (0-{})",
                version.bit_width()
            )));
        }
        return Ok(len);
    }

    let (mask_version, bits) = if DOTTED_RE.is_match(text) {
        let mask = parse_dotted(text)
            .map_err(|reason| ValidationError::InvalidMask(format!("'{text}' {reason}")))?;
        (IpVersion::V4, u32::from(mask) as u128)
    } else if COLON_HEX_RE.is_match(text) {
        let mask = Ipv6Addr::from_str(text)
            .map_err(|_| ValidationError::InvalidMask(format!("'{text}' is not an IPv6 netmask")))?;
        (IpVersion::V6, u128::from(mask))
    } else {
        return Err(ValidationError::InvalidMask(format!(
            "'{text}' is neither a prefix length nor a netmask"
        )));
    };

    if mask_version != version {
        return Err(ValidationError::VersionMismatch {
            address: version,
            mask: text.to_string(),
        });
    }
    mask_to_prefix(version, bits).ok_or_else(|| {
        ValidationError::InvalidMask(format!("'{text}' is not a contiguous netmask"))
    })
}

/// Split `address/prefix` text, e.g. `10.0.0.1/8`, into its two halves.
pub fn split_cidr(text: &str) -> Option<(&str, &str)> {
    let caps = CIDR_RE.captures(text.trim())?;
    let addr = caps.name("addr")?.as_str();
    let len = caps.name("len")?.as_str();
    Some((addr, len))
}

/// Exactly four decimal octets, each 0-255, without leading zeros.
fn parse_dotted(text: &str) -> Result<Ipv4Addr, String> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return Err(format!("has {} octets, expected 4", parts.len()));
    }
    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts.iter()) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("has a non-numeric octet '{part}'"));
        }
        if part.len() > 1 && part.starts_with('0') {
            return Err(format!("has an octet with a leading zero '{part}'"));
        }
        *octet = part
            .parse()
            .map_err(|_| format!("has an octet out of range '{part}'"))?;
    }
    Ok(Ipv4Addr::from(octets))
}

impl FromStr for Address {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Address, ValidationError> {
        parse_address(s)
    }
}
