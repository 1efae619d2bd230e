//! Turns address text into a vendor answer.
//!
//! Decoding failures are per-input diagnostics, and an unknown prefix is a normal
//! [`VendorAnswer::NotFound`] outcome. Neither aborts the caller.

use std::fmt;

use pnet::util::MacAddr;
use vendor6_common::network::eui64::{self, DecodeError};
use vendor6_common::vendors::{OuiRecord, VendorRepository};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorAnswer {
    Vendor(OuiRecord),
    /// The address decoded to `mac`, but no assignment covers its prefix.
    NotFound { mac: MacAddr },
    /// The input could not be decoded to a MAC address.
    Rejected { input: String, reason: DecodeError },
}

impl fmt::Display for VendorAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VendorAnswer::Vendor(record) => f.write_str(&record.company),
            VendorAnswer::NotFound { .. } => f.write_str("OUI not found"),
            VendorAnswer::Rejected { input, reason } => write!(f, "{input} is {reason}"),
        }
    }
}

/// Resolves `input` against `vendors`.
pub fn resolve<R: VendorRepository + ?Sized>(input: &str, vendors: &R) -> VendorAnswer {
    let mac = match eui64::decode(input) {
        Ok(mac) => mac,
        Err(reason) => {
            return VendorAnswer::Rejected {
                input: input.to_string(),
                reason,
            };
        }
    };

    match vendors.lookup(mac) {
        Some(record) => VendorAnswer::Vendor(record.clone()),
        None => VendorAnswer::NotFound { mac },
    }
}

/// Resolves many inputs against one borrowed registry.
pub struct VendorResolver<'a, R: ?Sized> {
    vendors: &'a R,
}

impl<'a, R: VendorRepository + ?Sized> VendorResolver<'a, R> {
    pub fn new(vendors: &'a R) -> Self {
        Self { vendors }
    }

    pub fn resolve(&self, input: &str) -> VendorAnswer {
        resolve(input, self.vendors)
    }
}
