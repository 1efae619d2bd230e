//! Shared models for `vendor6`.
//!
//! * [`network::eui64`]: decodes the MAC address embedded in an EUI-64 IPv6 address.
//! * [`vendors`]: the OUI record model and the vendor lookup contract.
//! * [`config`]: explicit runtime configuration.

pub mod config;
pub mod network;
pub mod vendors;
