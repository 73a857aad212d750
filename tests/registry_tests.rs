//! tests/registry_tests.rs
//! Algorithm registry lookups

use pbkdf2_hmac_rs::consts::SUPPORTED_ALGORITHMS;
use pbkdf2_hmac_rs::{resolve, Algorithm, Pbkdf2Error};

#[test]
fn every_supported_name_resolves() {
    for name in SUPPORTED_ALGORITHMS {
        let descriptor = resolve(name).unwrap();
        assert_eq!(descriptor.name(), name);
        assert_eq!(descriptor.algorithm().name(), name);
    }
}

#[test]
fn sizes_per_algorithm() {
    let expected = [
        ("MD5", 64, 16),
        ("SHA-1", 64, 20),
        ("SHA-224", 64, 28),
        ("SHA-256", 64, 32),
        ("SHA-384", 128, 48),
        ("SHA-512", 128, 64),
    ];
    for (name, block, digest) in expected {
        let descriptor = resolve(name).unwrap();
        assert_eq!(descriptor.block_size(), block, "{name} block size");
        assert_eq!(descriptor.digest_size(), digest, "{name} digest size");
    }
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    for bad in [
        "sha-256", "Sha256", "SHA256", "sha256", "md5", "Md5", "SHA-1 ", " SHA-1", "SHA1", "SHA-3",
        "", "SHA-512/256",
    ] {
        assert_eq!(
            resolve(bad).unwrap_err(),
            Pbkdf2Error::UnknownAlgorithm(bad.to_string()),
            "{bad:?} should not resolve"
        );
    }
}

#[test]
fn unknown_algorithm_message_lists_supported_names() {
    let message = resolve("SHA-3").unwrap_err().to_string();
    assert_eq!(
        message,
        "Unknown algorithm: 'SHA-3' (valid values SHA-512|SHA-384|SHA-256|SHA-224|SHA-1|MD5)"
    );
}

#[test]
fn enum_and_registry_agree() {
    assert_eq!(Algorithm::ALL.len(), SUPPORTED_ALGORITHMS.len());
    for algorithm in Algorithm::ALL {
        assert_eq!(resolve(algorithm.name()).unwrap(), algorithm.descriptor());
        assert!(std::ptr::eq(resolve(algorithm.name()).unwrap(), algorithm.descriptor()));
    }
    assert_eq!("SHA-224".parse::<Algorithm>().unwrap(), Algorithm::Sha224);
    assert!("sha-224".parse::<Algorithm>().is_err());
}

#[test]
fn concurrent_lookups() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let name = SUPPORTED_ALGORITHMS[i % SUPPORTED_ALGORITHMS.len()];
                resolve(name).unwrap().digest_size()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap() >= 16);
    }
}
