use std::net::Ipv6Addr;

use pnet::util::MacAddr;
use vendor6_common::network::eui64::InterfaceIdentifier;
use vendor6_core::OuiRegistry;

/// Excerpt of the IEEE dump, CRLF terminated like the published file.
pub const OUI_SAMPLE: &str = include_str!("../fixtures/oui_sample.txt");

/// Number of assignment blocks in [`OUI_SAMPLE`].
pub const OUI_SAMPLE_ENTRIES: usize = 6;

pub fn sample_registry() -> OuiRegistry {
    OUI_SAMPLE.parse().expect("fixture registry parses")
}

/// A MAC address inside the assignment `prefix` (six hex digits).
pub fn mac_in(prefix: &str, nic: [u8; 3]) -> MacAddr {
    let oui = u32::from_str_radix(prefix, 16).expect("prefix is hex");
    let [_, a, b, c] = oui.to_be_bytes();
    MacAddr::new(a, b, c, nic[0], nic[1], nic[2])
}

/// The SLAAC address `mac` would configure under `2001:db8::/64`.
pub fn eui64_address(mac: MacAddr) -> String {
    let mut octets = [0u8; 16];
    octets[..4].copy_from_slice(&[0x20, 0x01, 0x0d, 0xb8]);
    octets[8..].copy_from_slice(&InterfaceIdentifier::from(mac).octets());
    Ipv6Addr::from(octets).to_string()
}
