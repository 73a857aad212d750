//! tests/report_tests.rs
//! Hex output and expected-hash verification

use pbkdf2_hmac_rs::{
    derive_hex, resolve, verify_hex, Advisory, DerivationRequest, Pbkdf2Error, Verification,
};

const SHA1_C2: &str = "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957";

fn sha1_request(iterations: u32) -> DerivationRequest {
    DerivationRequest::new(resolve("SHA-1").unwrap(), "password", "salt", iterations, 20).unwrap()
}

#[test]
fn derive_hex_is_lowercase_and_sized() {
    let hex = derive_hex(&sha1_request(2)).unwrap();
    assert_eq!(hex, SHA1_C2);
}

#[test]
fn verify_match_prints_one() {
    let verdict = verify_hex(&sha1_request(2), SHA1_C2).unwrap();
    assert!(verdict.is_match());
    assert_eq!(verdict.to_string(), "1");
}

#[test]
fn verify_accepts_uppercase_expected() {
    let verdict = verify_hex(&sha1_request(2), &SHA1_C2.to_uppercase()).unwrap();
    assert_eq!(verdict, Verification::Match);
}

#[test]
fn verify_mismatch_reports_both_values() {
    let wrong = "0c60c80f961f0e71f3a9b524af6012062fe037a6";
    let verdict = verify_hex(&sha1_request(2), wrong).unwrap();
    assert_eq!(
        verdict,
        Verification::Mismatch {
            actual: SHA1_C2.to_string(),
            expected: wrong.to_string(),
        }
    );
    assert_eq!(verdict.to_string(), format!("0 {SHA1_C2} {wrong}"));
}

#[test]
fn verify_mismatch_echoes_expected_verbatim() {
    let wrong = "0C60C80F961F0E71F3A9B524AF6012062FE037A6";
    let verdict = verify_hex(&sha1_request(2), wrong).unwrap();
    assert_eq!(verdict.to_string(), format!("0 {SHA1_C2} {wrong}"));
}

#[test]
fn verify_mismatch_on_truncated_expected() {
    let verdict = verify_hex(&sha1_request(2), &SHA1_C2[..38]).unwrap();
    assert!(!verdict.is_match());
}

#[test]
fn verify_rejects_malformed_expected() {
    for bad in ["xyz0", "abc", "ea6c 014d"] {
        assert!(matches!(
            verify_hex(&sha1_request(2), bad),
            Err(Pbkdf2Error::InvalidEncoding(_))
        ));
    }
}

#[test]
fn advisories_do_not_block_output() {
    let request =
        DerivationRequest::new(resolve("MD5").unwrap(), "password", "salt", 1, 40).unwrap();
    assert!(matches!(
        request.advisories().as_slice(),
        [
            Advisory::OutputExceedsDigest { digest_size: 16, .. },
            Advisory::LowIterationCount { .. }
        ]
    ));
    assert_eq!(derive_hex(&request).unwrap().len(), 80);
}
