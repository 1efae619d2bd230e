//! Vendor resolution for EUI-64 based IPv6 addresses.
//!
//! * [`registry`]: parses the IEEE OUI text dump into an [`registry::OuiRegistry`].
//! * [`resolver`]: decodes an address and looks its vendor up.
//! * [`source`]: keeps a local copy of the registry, downloading it when needed.

pub mod registry;
pub mod resolver;
pub mod source;

pub use registry::{OuiRegistry, ParseError};
pub use resolver::{VendorAnswer, VendorResolver, resolve};
