#![cfg(test)]
use std::thread;

use pnet::util::MacAddr;
use vendor6_common::network::eui64::DecodeError;
use vendor6_core::{VendorAnswer, VendorResolver, resolve};

use crate::utils;

#[test]
fn resolves_documented_examples() {
    let registry = utils::sample_registry();

    let answer = resolve("2001:db8::0a00:7ff:fe12:3456", &registry);
    assert_eq!(answer.to_string(), "Apple, Inc.");

    let answer = resolve("2001:db8::6666:b3ff:fe11:1111", &registry);
    assert_eq!(answer.to_string(), "TP-LINK TECHNOLOGIES CO.,LTD.");
}

#[test]
fn every_assignment_round_trips_through_slaac() {
    let registry = utils::sample_registry();
    for record in registry.iter() {
        let mac = utils::mac_in(&record.prefix, [0xab, 0xcd, 0xef]);
        let address = utils::eui64_address(mac);
        match resolve(&address, &registry) {
            VendorAnswer::Vendor(found) => assert_eq!(&found, record, "{address}"),
            other => panic!("{address} resolved to {other:?}"),
        }
    }
}

#[test]
fn unknown_prefix_is_not_found() {
    let registry = utils::sample_registry();
    let mac = MacAddr::new(0x00, 0x11, 0x22, 0x33, 0x44, 0x55);
    let answer = resolve(&utils::eui64_address(mac), &registry);
    assert_eq!(answer, VendorAnswer::NotFound { mac });
    assert_eq!(answer.to_string(), "OUI not found");
}

#[test]
fn decode_failures_are_reported_per_input() {
    let registry = utils::sample_registry();
    let resolver = VendorResolver::new(&registry);

    let inputs = [
        ("2001:db8::zz", DecodeError::InvalidAddress),
        ("198.51.100.7", DecodeError::NotIpv6),
        ("::ffff:198.51.100.7", DecodeError::NotIpv6),
        ("2001:db8::1", DecodeError::NotEui64),
    ];
    for (input, reason) in inputs {
        assert_eq!(
            resolver.resolve(input),
            VendorAnswer::Rejected {
                input: input.to_string(),
                reason
            }
        );
    }

    // The resolver keeps working after failures.
    assert!(matches!(
        resolver.resolve("fe80::a00:7ff:fe00:1%en0"),
        VendorAnswer::Vendor(_)
    ));
}

#[test]
fn shared_registry_serves_concurrent_lookups() {
    let registry = utils::sample_registry();
    let resolver = VendorResolver::new(&registry);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8u8)
            .map(|n| {
                let resolver = &resolver;
                scope.spawn(move || {
                    let mac = MacAddr::new(0x00, 0x1b, 0x63, n, n, n);
                    resolver.resolve(&utils::eui64_address(mac))
                })
            })
            .collect();

        for handle in handles {
            let answer = handle.join().unwrap();
            assert_eq!(answer.to_string(), "Apple, Inc.");
        }
    });
}
