//! Line classification for the IEEE MA-L text dump.
//!
//! Every assignment is a block of the shape:
//!
//! ```text
//! 08-00-07   (hex)\t\tApple, Inc.
//! 080007     (base 16)\t\tApple, Inc.
//! \t\t\t\t1 Infinite Loop
//! \t\t\t\tCupertino  CA  95014
//! \t\t\t\tUS
//!
//! ```

use std::mem;
use std::sync::LazyLock;

use regex::Regex;
use vendor6_common::vendors::OuiRecord;

const INDENT: &str = "\t\t\t\t";
const BASE16_TAG: &str = "(base 16)";

const HEX_LINE_PATTERN: &str = r"^[0-9A-Fa-f]{2}-[0-9A-Fa-f]{2}-[0-9A-Fa-f]{2}\s+\(hex\)";

static HEX_LINE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(HEX_LINE_PATTERN).ok());

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    /// `XX-XX-XX (hex) Company`, duplicated by the base 16 line.
    HexHeader,
    /// `XXXXXX (base 16) Company`
    Base16 { prefix: &'a str, company: &'a str },
    /// Indented two letter country code.
    Country(&'a str),
    /// Any other indented line.
    Address(&'a str),
    Blank,
    Other,
}

/// Classifies a line. Rules are tried in priority order, so a country code is
/// never mistaken for an address fragment.
pub(crate) fn classify(line: &str) -> LineKind<'_> {
    if HEX_LINE.as_ref().is_some_and(|re| re.is_match(line)) {
        return LineKind::HexHeader;
    }

    if let Some(kind) = parse_base16(line) {
        return kind;
    }

    if let Some(indented) = line.strip_prefix(INDENT) {
        let content = indented.trim();
        if is_country_code(content) {
            return LineKind::Country(content);
        }
        return LineKind::Address(content);
    }

    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    LineKind::Other
}

fn parse_base16(line: &str) -> Option<LineKind<'_>> {
    let (prefix, company) = line.split_once(BASE16_TAG)?;
    let prefix = prefix.trim_end();
    let is_prefix = prefix.len() == 6 && prefix.bytes().all(|b| b.is_ascii_hexdigit());
    is_prefix.then(|| LineKind::Base16 {
        prefix,
        company: company.trim(),
    })
}

fn is_country_code(content: &str) -> bool {
    content.len() == 2 && content.bytes().all(|b| b.is_ascii_uppercase())
}

/// Accumulates the fields of the block currently being read.
#[derive(Debug, Default)]
pub(crate) struct RecordBuilder {
    prefix: Option<String>,
    company: String,
    country: Option<String>,
    address: Option<String>,
}

impl RecordBuilder {
    /// Starts a new record. Anything accumulated since the last blank line is
    /// discarded, so a block yields at most one entry.
    pub(crate) fn start(&mut self, prefix: &str, company: &str) {
        *self = Self {
            prefix: Some(prefix.to_ascii_lowercase()),
            company: company.to_string(),
            ..Self::default()
        };
    }

    pub(crate) fn set_country(&mut self, country: &str) {
        self.country = Some(country.to_string());
    }

    pub(crate) fn push_address(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        match &mut self.address {
            Some(address) => {
                address.push(' ');
                address.push_str(fragment);
            }
            None => self.address = Some(fragment.to_string()),
        }
    }

    /// Takes the record and resets the accumulator. Yields nothing when no
    /// base 16 line was seen, so stray fields never produce a keyless entry.
    pub(crate) fn finish(&mut self) -> Option<OuiRecord> {
        let builder = mem::take(self);
        let prefix = builder.prefix?;
        Some(OuiRecord {
            prefix,
            company: builder.company,
            country: builder.country,
            address: builder.address,
        })
    }
}
