//! # OUI Registry
//!
//! In-memory index of the IEEE MA-L assignments, keyed by six lowercase hex digits.
//!
//! The registry is built once from the text dump published at
//! <https://standards-oui.ieee.org/oui/oui.txt> and is read-only afterwards, so a
//! single instance can be shared by reference across any number of lookups.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use pnet::util::MacAddr;
use thiserror::Error;
use tracing::{debug, info};
use vendor6_common::vendors::{self, OuiRecord, VendorRepository};

mod parser;

use parser::{LineKind, RecordBuilder};

/// Boilerplate lines at the top of the dump that carry no assignments.
pub const HEADER_LINES: usize = 4;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to open OUI registry {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read OUI registry")]
    Io(#[from] io::Error),
    #[error("OUI registry ended after {lines} of {} header lines", HEADER_LINES)]
    MissingHeader { lines: usize },
}

#[derive(Debug, Default, Clone)]
pub struct OuiRegistry {
    records: HashMap<String, OuiRecord>,
}

impl OuiRegistry {
    /// Parses the IEEE text dump in a single pass.
    ///
    /// A block is committed on the blank line that closes it, or at end of input
    /// when the dump lacks a trailing blank line. A line that is not valid UTF-8
    /// fails the whole build with [`ParseError::Io`].
    pub fn build<R: BufRead>(mut reader: R) -> Result<Self, ParseError> {
        let mut registry = Self::default();
        let mut pending = RecordBuilder::default();
        let mut buf: Vec<u8> = Vec::new();
        let mut line_count: usize = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_count += 1;
            if line_count <= HEADER_LINES {
                continue;
            }

            let line: &str = std::str::from_utf8(strip_line_ending(&buf)).map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("line {line_count} is not valid UTF-8: {e}"),
                )
            })?;
            let committed = match parser::classify(line) {
                LineKind::Base16 { prefix, company } => {
                    pending.start(prefix, company);
                    None
                }
                LineKind::Country(country) => {
                    pending.set_country(country);
                    None
                }
                LineKind::Address(fragment) => {
                    pending.push_address(fragment);
                    None
                }
                LineKind::Blank => pending.finish(),
                LineKind::HexHeader | LineKind::Other => None,
            };

            if let Some(record) = committed {
                registry.insert(record);
            }
        }

        if line_count < HEADER_LINES {
            return Err(ParseError::MissingHeader { lines: line_count });
        }

        if let Some(record) = pending.finish() {
            registry.insert(record);
        }

        info!(entries = registry.len(), "OUI registry built");
        Ok(registry)
    }

    /// Opens `path` and builds the registry from its contents.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ParseError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loading OUI registry");
        Self::build(BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a prefix written as `XXXXXX`, `XX-XX-XX` or `XX:XX:XX` in any case.
    pub fn get(&self, prefix: &str) -> Option<&OuiRecord> {
        let key: String = prefix
            .chars()
            .filter(|c| !matches!(c, '-' | ':'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        self.records.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OuiRecord> {
        self.records.values()
    }

    fn insert(&mut self, record: OuiRecord) {
        match self.records.entry(record.prefix.clone()) {
            Entry::Occupied(mut occupied) => {
                debug!(
                    prefix = %record.prefix,
                    previous = %occupied.get().company,
                    company = %record.company,
                    "duplicate OUI assignment, keeping the later one"
                );
                occupied.insert(record);
            }
            Entry::Vacant(vacant) => {
                vacant.insert(record);
            }
        }
    }
}

impl FromStr for OuiRegistry {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::build(s.as_bytes())
    }
}

impl VendorRepository for OuiRegistry {
    fn lookup(&self, mac_addr: MacAddr) -> Option<&OuiRecord> {
        self.records.get(&vendors::oui_key(mac_addr))
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
