use pnet::util::MacAddr;

/// One assignment from the IEEE MA-L registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OuiRecord {
    /// Six lowercase hex digits, e.g. `080007`.
    pub prefix: String,
    pub company: String,
    /// Two-letter country code, when the registry lists one.
    pub country: Option<String>,
    /// Postal address lines joined with single spaces.
    pub address: Option<String>,
}

/// Defines the contract for resolving device manufacturers from MAC addresses.
pub trait VendorRepository {
    /// Retrieves the OUI record whose prefix matches the first three octets of `mac_addr`.
    ///
    /// # Returns
    /// * `Some(&OuiRecord)` - The assignment covering this MAC address.
    /// * `None` - If the OUI is unknown.
    fn lookup(&self, mac_addr: MacAddr) -> Option<&OuiRecord>;
}

/// Formats the OUI of a MAC address as a registry key (`08:00:07:..` -> `080007`).
pub fn oui_key(mac_addr: MacAddr) -> String {
    format!("{:02x}{:02x}{:02x}", mac_addr.0, mac_addr.1, mac_addr.2)
}
