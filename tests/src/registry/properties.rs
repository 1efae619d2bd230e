#![cfg(test)]
use std::io::BufReader;

use vendor6_common::vendors::VendorRepository;
use vendor6_core::OuiRegistry;

use crate::utils::{self, OUI_SAMPLE, OUI_SAMPLE_ENTRIES};

#[test]
fn sample_registry_has_one_entry_per_block() {
    let registry = utils::sample_registry();
    assert_eq!(registry.len(), OUI_SAMPLE_ENTRIES);

    let private = registry.get("AC-DE-48").expect("private block is kept");
    assert_eq!(private.company, "Private");
    assert_eq!(private.country, None);
    assert_eq!(private.address, None);

    let tp_link = registry.get("6466b3").unwrap();
    assert_eq!(tp_link.country.as_deref(), Some("CN"));
    assert_eq!(
        tp_link.address.as_deref(),
        Some(
            "Building 24 (floors 1,3,4,5) and 28 (floors1-4) \
             Central Science and Technology Park,Shennan Rd, Nanshan \
             Shenzhen  Guangdong  518057"
        )
    );
}

#[test]
fn lookup_ignores_source_casing() {
    let upper = utils::sample_registry();
    let lower: OuiRegistry = OUI_SAMPLE
        .lines()
        .map(|line| match line.split_once("(base 16)") {
            Some((prefix, company)) => format!("{}(base 16){company}", prefix.to_lowercase()),
            None => line.to_string(),
        })
        .collect::<Vec<String>>()
        .join("\n")
        .parse()
        .unwrap();

    assert_eq!(lower.len(), upper.len());
    for record in upper.iter() {
        let mac = utils::mac_in(&record.prefix, [0x12, 0x34, 0x56]);
        assert_eq!(lower.lookup(mac), upper.lookup(mac), "{}", record.prefix);
        assert!(upper.lookup(mac).is_some());
    }
}

#[test]
fn final_block_without_delimiter_is_kept() {
    let truncated = OUI_SAMPLE.trim_end();
    let registry: OuiRegistry = truncated.parse().unwrap();
    assert_eq!(registry.len(), OUI_SAMPLE_ENTRIES);

    let last = registry.get("286FB9").unwrap();
    assert_eq!(last.company, "Nokia Shanghai Bell Co., Ltd.");
    assert_eq!(last.country.as_deref(), Some("CN"));
}

#[test]
fn blocks_without_base16_line_are_not_counted() {
    let mut text = OUI_SAMPLE.to_string();
    text.push_str("FF-FF-FF   (hex)\t\tOrphan\r\n\t\t\t\tNowhere\r\n\t\t\t\tUS\r\n\r\n\r\n");
    let registry: OuiRegistry = text.parse().unwrap();
    assert_eq!(registry.len(), OUI_SAMPLE_ENTRIES);
    assert!(registry.get("ffffff").is_none());
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("oui.txt");
    std::fs::write(&path, OUI_SAMPLE).unwrap();

    let loaded = OuiRegistry::load(&path).unwrap();
    let streamed = OuiRegistry::build(BufReader::new(OUI_SAMPLE.as_bytes())).unwrap();
    assert_eq!(loaded.len(), streamed.len());
    for record in streamed.iter() {
        assert_eq!(loaded.get(&record.prefix), Some(record));
    }
}

#[test]
fn block_with_two_base16_lines_counts_once() {
    let mut text = OUI_SAMPLE.to_string();
    text.push_str(
        "FF-FF-F0   (hex)\t\tFirst\r\n\
         FFFFF0     (base 16)\t\tFirst\r\n\
         FFFFF1     (base 16)\t\tSecond\r\n\
         \t\t\t\tDE\r\n\
         \r\n",
    );
    let registry: OuiRegistry = text.parse().unwrap();
    assert_eq!(registry.len(), OUI_SAMPLE_ENTRIES + 1);
    assert!(registry.get("fffff0").is_none());
    assert_eq!(registry.get("fffff1").unwrap().country.as_deref(), Some("DE"));
}
