//! # EUI-64 Address Decoding
//!
//! Recovers the 48-bit MAC address that SLAAC embeds in the interface identifier
//! of an IPv6 address (RFC 4291, Appendix A).
//!
//! The expansion of a MAC into an EUI-64 identifier flips the universal/local bit
//! of the first octet and splices `ff:fe` between the OUI and the NIC specific half:
//!
//! ```text
//! 08:00:07:12:34:56  ->  0a00:07ff:fe12:3456
//! ```
//!
//! [`decode`] reverses that transform.

use std::net::{IpAddr, Ipv6Addr};

use pnet::util::MacAddr;
use thiserror::Error;

/// The universal/local bit of the first MAC octet.
const UNIVERSAL_LOCAL_BIT: u8 = 0x02;

/// Marker inserted in the middle of a MAC when it is expanded to 64 bits.
const EUI64_MARKER: [u8; 2] = [0xff, 0xfe];

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("not a valid IPv6 address")]
    InvalidAddress,
    #[error("not an IPv6 address")]
    NotIpv6,
    #[error("not an EUI-64 address")]
    NotEui64,
}

/// The low 64 bits of an IPv6 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterfaceIdentifier([u8; 8]);

impl InterfaceIdentifier {
    pub fn from_addr(addr: &Ipv6Addr) -> Self {
        let mut iid = [0u8; 8];
        iid.copy_from_slice(&addr.octets()[8..]);
        Self(iid)
    }

    pub fn octets(&self) -> [u8; 8] {
        self.0
    }

    /// Whether bytes 3 and 4 carry the `ff:fe` marker.
    pub fn is_eui64(&self) -> bool {
        self.0[3..5] == EUI64_MARKER
    }

    /// Reconstructs the MAC address, or `None` if the identifier is not EUI-64.
    pub fn to_mac(&self) -> Option<MacAddr> {
        if !self.is_eui64() {
            return None;
        }
        let iid = &self.0;
        Some(MacAddr::new(
            iid[0] ^ UNIVERSAL_LOCAL_BIT,
            iid[1],
            iid[2],
            iid[5],
            iid[6],
            iid[7],
        ))
    }
}

impl From<MacAddr> for InterfaceIdentifier {
    /// Modified EUI-64 expansion of a MAC address.
    fn from(mac: MacAddr) -> Self {
        Self([
            mac.0 ^ UNIVERSAL_LOCAL_BIT,
            mac.1,
            mac.2,
            EUI64_MARKER[0],
            EUI64_MARKER[1],
            mac.3,
            mac.4,
            mac.5,
        ])
    }
}

/// Decodes the MAC address embedded in an EUI-64 based IPv6 address.
///
/// Accepts an optional scope zone (`fe80::1%eth0`), which is discarded.
///
/// # Errors
/// * [`DecodeError::InvalidAddress`] - the text is not an IP address.
/// * [`DecodeError::NotIpv6`] - the address is IPv4 or IPv4-mapped IPv6.
/// * [`DecodeError::NotEui64`] - the interface identifier lacks the `ff:fe` marker.
pub fn decode(input: &str) -> Result<MacAddr, DecodeError> {
    let ipv6_addr = parse_ipv6(input)?;
    InterfaceIdentifier::from_addr(&ipv6_addr)
        .to_mac()
        .ok_or(DecodeError::NotEui64)
}

fn parse_ipv6(input: &str) -> Result<Ipv6Addr, DecodeError> {
    let input = input.trim();
    let (addr_str, zone) = match input.split_once('%') {
        Some((addr_str, zone)) => (addr_str, Some(zone)),
        None => (input, None),
    };

    if zone.is_some_and(str::is_empty) {
        return Err(DecodeError::InvalidAddress);
    }

    match addr_str.parse::<IpAddr>() {
        Ok(IpAddr::V6(ipv6_addr)) if ipv6_addr.to_ipv4_mapped().is_some() => {
            Err(DecodeError::NotIpv6)
        }
        Ok(IpAddr::V6(ipv6_addr)) => Ok(ipv6_addr),
        // Zones only exist for IPv6
        Ok(IpAddr::V4(_)) if zone.is_some() => Err(DecodeError::InvalidAddress),
        Ok(IpAddr::V4(_)) => Err(DecodeError::NotIpv6),
        Err(_) => Err(DecodeError::InvalidAddress),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
